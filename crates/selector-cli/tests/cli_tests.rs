use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a Command with --no-color flag for testing
fn selector_cmd() -> Command {
    let mut cmd = Command::cargo_bin("selector").expect("Failed to find selector binary");
    cmd.arg("--no-color");
    // Keep a user's catalog in $XDG_CONFIG_HOME out of the tests.
    cmd.env("XDG_CONFIG_HOME", "/nonexistent-selector-config");
    cmd
}

/// Helper function to write a catalog file for CLI tests
fn write_catalog(json: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, json).expect("Failed to write catalog");
    let path = path.to_str().expect("Non UTF-8 temp path").to_string();
    (temp_dir, path)
}

#[test]
fn test_cli_initial_form() {
    selector_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Product selection"))
        .stdout(predicate::str::contains("▸ **type**: _pending_"))
        .stdout(predicate::str::contains("· quantity (hidden)"));
}

#[test]
fn test_cli_apply_full_selection() {
    selector_cmd()
        .args([
            "apply",
            "type=desktop",
            "quantity=3",
            "support=essential",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Counting: Desktops"))
        .stdout(predicate::str::contains("- Support tier: Essential"))
        .stdout(predicate::str::contains(
            "Your selected product id is uai-essential-desktop x 3",
        ))
        .stdout(predicate::str::contains("▸ **add**: _pending_"));
}

#[test]
fn test_cli_apply_rejects_zero_quantity() {
    selector_cmd()
        .args(["apply", "type=desktop", "quantity=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("▸ **quantity**: _pending_"))
        .stdout(predicate::str::contains("· support (hidden)"));
}

#[test]
fn test_cli_apply_type_change_resets_downstream() {
    selector_cmd()
        .args([
            "apply",
            "type=desktop",
            "quantity=3",
            "support=essential",
            "add=yes",
            "type=virtual-server",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("▸ **type**: virtual-server"))
        .stdout(predicate::str::contains("▸ **quantity**: _pending_"))
        .stdout(predicate::str::contains("· add (hidden)"))
        .stdout(predicate::str::contains("Selection complete.").not());
}

#[test]
fn test_cli_apply_unknown_step_fails() {
    selector_cmd()
        .args(["apply", "colour=red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown step 'colour'"));
}

#[test]
fn test_cli_apply_malformed_event_fails() {
    selector_cmd()
        .args(["apply", "quantity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected name=value"));
}

#[test]
fn test_cli_apply_requires_events() {
    selector_cmd().arg("apply").assert().failure();
}

#[test]
fn test_cli_json_output() {
    let output = selector_cmd()
        .args(["--json", "apply", "type=desktop", "quantity=2", "support=standard"])
        .output()
        .expect("Failed to run selector");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert_eq!(report["complete"], false);
    assert_eq!(report["steps"][1]["value"], "2");
    assert_eq!(report["steps"][3]["visible"], true);
    assert_eq!(report["cart_line"]["support"], "standard");
}

#[test]
fn test_cli_run_from_stdin() {
    selector_cmd()
        .arg("run")
        .write_stdin("# a desktop order\ntype=desktop\nquantity=-1\nquantity=2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded: type = desktop"))
        .stdout(predicate::str::contains("Ignored: quantity = -1"))
        .stdout(predicate::str::contains("Recorded: quantity = 2"));
}

#[test]
fn test_cli_run_reports_bad_lines() {
    selector_cmd()
        .arg("run")
        .write_stdin("type=desktop\ncolour=red\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Recorded: type = desktop"))
        .stderr(predicate::str::contains("line 2: Unknown step 'colour'"));
}

#[test]
fn test_cli_run_json_lines() {
    let output = selector_cmd()
        .args(["--json", "run"])
        .write_stdin("type=desktop\nquantity=1\n")
        .output()
        .expect("Failed to run selector");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Output is not UTF-8");
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("Line is not JSON"))
        .collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["outcome"]["step"], "type");
    assert_eq!(
        events[1]["outcome"]["visibility"]["shown"],
        serde_json::json!(["type", "quantity", "support"])
    );
}

#[test]
fn test_cli_catalog_default() {
    selector_cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Product types"))
        .stdout(predicate::str::contains("`physical-server` Physical server"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let (_temp_dir, path) = write_catalog(
        r#"{"product_types":[{"value":"iot","name":"IoT device"}]}"#,
    );

    selector_cmd()
        .args(["--catalog-file", &path, "apply", "type=iot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Counting: IoT devices"));

    selector_cmd()
        .args(["--catalog-file", &path, "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No support tiers listed."));
}

#[test]
fn test_cli_missing_catalog_file() {
    selector_cmd()
        .args(["--catalog-file", "/nonexistent/catalog.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize selector"));
}

#[test]
fn test_cli_schema() {
    let output = selector_cmd()
        .arg("schema")
        .output()
        .expect("Failed to run selector");
    assert!(output.status.success());

    let schema: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Schema is not JSON");
    assert_eq!(schema["title"], "FormReport");
    assert!(schema["properties"]["steps"].is_object());
}
