//! Core library for the multi-step product selector.
//!
//! A product form asks for a product type, a quantity, a support tier and a
//! final add-to-cart confirmation, in that order. This crate provides the
//! stepper behind it: which steps hold a value, which form sections are
//! visible, and the cart line item derived from the selection.
//!
//! # Architecture
//!
//! - **Step values** ([`state`]): [`StepState`] stores one optional value per
//!   [`Step`] and notifies a [`StateObserver`] after every mutation.
//! - **Activation** ([`gate`]): [`StepGate`] derives the visible prefix of
//!   steps; [`GateRenderer`] applies it to a [`FormView`].
//! - **Stepper** ([`selector`]): [`ProductSelector`] dispatches input events,
//!   cascades resets and recomputes the [`CartLineItem`].
//! - **Form** ([`form`]): the [`FormView`] collaborator and the in-memory
//!   [`FormSnapshot`].
//!
//! # Quick Start
//!
//! ```rust
//! use selector_core::{FieldInput, FormSnapshot, SelectorBuilder, Step};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut selector = SelectorBuilder::new()
//!     .with_catalog_path(None::<&str>)
//!     .build(FormSnapshot::default())?;
//!
//! let outcome = selector.handle_input(&FieldInput::new("type", "desktop"))?;
//! assert_eq!(
//!     outcome.visibility.map(|v| v.shown.to_vec()),
//!     Some(vec![Step::Type, Step::Quantity])
//! );
//!
//! // Zero is not a quantity; the step stays unset.
//! let outcome = selector.handle_input(&FieldInput::new("quantity", "0"))?;
//! assert!(!outcome.accepted);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod form;
pub mod gate;
pub mod models;
pub mod params;
pub mod selector;
pub mod state;

// Re-export commonly used types
pub use display::{FormReport, InputStatus};
pub use error::{Result, SelectorError};
pub use form::{FormSnapshot, FormView};
pub use gate::{GateRenderer, StepGate, Visibility};
pub use models::{CartLineItem, Catalog, CatalogEntry, InputOutcome, Step};
pub use params::FieldInput;
pub use selector::{ProductSelector, SelectorBuilder};
pub use state::{StateObserver, StepState, StepValues};
