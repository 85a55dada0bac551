//! Command handlers for the selector CLI.
//!
//! Each handler builds a fresh [`ProductSelector`] over an in-memory
//! [`FormSnapshot`], feeds it events and prints the result either as
//! markdown through the [`TerminalRenderer`] or as JSON.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use clap::Args;
use log::{info, warn};
use selector_core::{
    FieldInput, FormReport, FormSnapshot, InputOutcome, InputStatus, ProductSelector,
    SelectorBuilder,
};
use serde_json::json;

use crate::renderer::TerminalRenderer;

/// Apply input events to a fresh form
///
/// Events are applied left to right, exactly as if the user had changed each
/// field in turn. Field names are `type`, `quantity`, `support` and `add`.
#[derive(Args)]
pub struct ApplyArgs {
    /// Input events, e.g. `type=desktop quantity=3 support=essential`
    #[arg(value_name = "NAME=VALUE", required = true)]
    pub events: Vec<FieldInput>,
}

/// Runs CLI commands against a selector built from `builder`.
pub struct Cli {
    builder: SelectorBuilder,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(builder: SelectorBuilder, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            builder,
            renderer,
            json,
        }
    }

    /// Prints the form before any input.
    pub fn show_initial(&self) -> Result<()> {
        let selector = self.selector()?;
        self.emit_report(&FormReport::from_selector(&selector))
    }

    /// Applies every event in order, then prints the final form.
    pub fn apply(&self, args: &ApplyArgs) -> Result<()> {
        let mut selector = self.selector()?;

        for input in &args.events {
            let outcome = selector
                .handle_input(input)
                .with_context(|| format!("Failed to apply {}={}", input.name, input.value))?;
            if !outcome.accepted {
                info!("Quantity '{}' ignored", input.value);
            }
        }

        self.emit_report(&FormReport::from_selector(&selector))
    }

    /// Handles `name=value` lines from `reader` until end of input.
    ///
    /// Blank lines and lines starting with `#` are skipped. A malformed line
    /// is reported and skipped; the command fails at the end if any were.
    pub fn run<R: BufRead>(&self, reader: R) -> Result<()> {
        let mut selector = self.selector()?;
        let mut failures = 0usize;

        for (number, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read input")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match Self::handle_line(&mut selector, line) {
                Ok((input, outcome)) => self.emit_event(&selector, &input, &outcome)?,
                Err(e) => {
                    warn!("Skipping line {}: {e}", number + 1);
                    eprintln!("Error: line {}: {e}", number + 1);
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            bail!("{failures} event(s) could not be applied");
        }
        Ok(())
    }

    /// Prints the catalog used to label the form.
    pub fn show_catalog(&self) -> Result<()> {
        let catalog = self
            .builder
            .load_catalog()
            .context("Failed to load catalog")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            Ok(())
        } else {
            self.renderer.render(&catalog.to_string())
        }
    }

    /// Prints the JSON schema of the report emitted with `--json`.
    pub fn print_schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(FormReport);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn selector(&self) -> Result<ProductSelector<FormSnapshot>> {
        self.builder
            .clone()
            .build(FormSnapshot::default())
            .context("Failed to initialize selector")
    }

    fn handle_line(
        selector: &mut ProductSelector<FormSnapshot>,
        line: &str,
    ) -> selector_core::Result<(FieldInput, InputOutcome)> {
        let input: FieldInput = line.parse()?;
        let outcome = selector.handle_input(&input)?;
        Ok((input, outcome))
    }

    fn emit_event(
        &self,
        selector: &ProductSelector<FormSnapshot>,
        input: &FieldInput,
        outcome: &InputOutcome,
    ) -> Result<()> {
        let report = FormReport::from_selector(selector);
        if self.json {
            let event = json!({ "outcome": outcome, "form": report });
            println!("{}", serde_json::to_string(&event)?);
            Ok(())
        } else {
            self.renderer
                .render_status(&InputStatus::new(outcome, &input.value).to_string())?;
            self.renderer.render(&report.to_string())
        }
    }

    fn emit_report(&self, report: &FormReport) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
            Ok(())
        } else {
            self.renderer.render(&report.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn cli() -> Cli {
        let builder = SelectorBuilder::new().with_catalog(Default::default());
        Cli::new(builder, TerminalRenderer::new(false), true)
    }

    #[test]
    fn test_run_skips_comments_and_blank_lines() {
        let input = Cursor::new("# pick a desktop\n\ntype=desktop\n");
        assert!(cli().run(input).is_ok());
    }

    #[test]
    fn test_run_fails_after_bad_lines() {
        let input = Cursor::new("type=desktop\nnonsense\ncolour=red\nquantity=2\n");
        let err = cli().run(input).unwrap_err();
        assert_eq!(err.to_string(), "2 event(s) could not be applied");
    }

    #[test]
    fn test_apply_unknown_step() {
        let args = ApplyArgs {
            events: vec![FieldInput::new("colour", "red")],
        };
        let err = cli().apply(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to apply colour=red"));
    }
}
