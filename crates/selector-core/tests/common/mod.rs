use std::path::PathBuf;

use selector_core::{FieldInput, FormSnapshot, ProductSelector, SelectorBuilder};
use tempfile::TempDir;

/// Helper function to create a selector backed by a catalog file
pub fn create_selector_with_catalog(json: &str) -> (TempDir, ProductSelector<FormSnapshot>) {
    let (temp_dir, path) = write_catalog(json);
    let selector = SelectorBuilder::new()
        .with_catalog_path(Some(&path))
        .build(FormSnapshot::default())
        .expect("Failed to create selector");
    (temp_dir, selector)
}

/// Helper function to write a catalog file into a temporary directory
pub fn write_catalog(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, json).expect("Failed to write catalog");
    (temp_dir, path)
}

/// Feeds `name=value` events to the selector in order
pub fn apply_events(selector: &mut ProductSelector<FormSnapshot>, events: &[&str]) {
    for event in events {
        let input: FieldInput = event.parse().expect("Failed to parse event");
        selector
            .handle_input(&input)
            .expect("Failed to handle input");
    }
}
