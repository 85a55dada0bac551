//! Display formatting for the product form.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrapper types for contextual output. Everything formats as
//! markdown so the CLI can render it richly or print it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Step values +  │    │   FormReport /  │    │   Formatted     │
//! │  FormSnapshot   │───▶│  InputStatus    │───▶│    Output       │
//! │                 │    │                 │    │ (Terminal/JSON) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`report`]: Whole-form report ([`FormReport`])
//! - [`status`]: Per-event feedback ([`InputStatus`])
//!
//! ## Usage
//!
//! ```rust
//! use selector_core::{display::FormReport, FieldInput, FormSnapshot, SelectorBuilder};
//!
//! # fn example() -> selector_core::Result<()> {
//! let mut selector = SelectorBuilder::new().build(FormSnapshot::default())?;
//! selector.handle_input(&FieldInput::new("type", "desktop"))?;
//!
//! let report = FormReport::from_selector(&selector);
//! assert!(report.to_string().contains("# Product selection"));
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod report;
pub mod status;

pub use report::{FormReport, StepReport};
pub use status::InputStatus;
