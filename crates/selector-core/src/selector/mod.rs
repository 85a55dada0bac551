//! The per-form stepper.
//!
//! [`ProductSelector`] owns the step values for one form together with the
//! view they are rendered to. Every input event flows through
//! [`ProductSelector::handle_input`], which records or rejects the value,
//! cascades resets to later steps and reports the resulting state.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   StepState     │    │  GateRenderer   │
//! │ (type, quantity,│───▶│ (values, set,   │───▶│ (StepGate ──▶   │
//! │  support, add)  │    │  reset)         │    │  FormView)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Input events          Step values          Section visibility
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Catalog resolution and construction
//! - [`handlers`]: Per-step input handling
//!
//! # Example
//!
//! ```rust
//! use selector_core::{FieldInput, FormSnapshot, SelectorBuilder, Step};
//!
//! # fn example() -> selector_core::Result<()> {
//! let mut selector = SelectorBuilder::new().build(FormSnapshot::default())?;
//!
//! selector.handle_input(&FieldInput::new("type", "desktop"))?;
//! selector.handle_input(&FieldInput::new("quantity", "3"))?;
//! let outcome = selector.handle_input(&FieldInput::new("support", "essential"))?;
//!
//! let line = outcome.cart_line.expect("support recomputes the line item");
//! assert_eq!(line.to_string(), "uai-essential-desktop x 3");
//! assert!(!selector.view().is_hidden(Step::Add));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod handlers;


pub use builder::SelectorBuilder;

use crate::{
    form::FormView,
    gate::{GateRenderer, StepGate, Visibility},
    models::{CartLineItem, Catalog},
    state::{StepState, StepValues},
};

/// Stepper for a single product form.
#[derive(Debug)]
pub struct ProductSelector<V: FormView> {
    pub(crate) state: StepState<GateRenderer<V>>,
    pub(crate) catalog: Catalog,
}

impl<V: FormView> ProductSelector<V> {
    /// Creates a selector and renders the initial visibility to `view`.
    pub(crate) fn new(view: V, catalog: Catalog) -> Self {
        let mut state = StepState::new(GateRenderer::new(view));
        state.refresh();
        Self { state, catalog }
    }

    pub fn values(&self) -> &StepValues {
        self.state.values()
    }

    pub fn view(&self) -> &V {
        self.state.observer().view()
    }

    pub fn into_view(self) -> V {
        self.state.into_observer().into_view()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Visibility the gate derives from the current values.
    pub fn visibility(&self) -> Option<Visibility> {
        StepGate::evaluate(self.values())
    }

    /// Line item for the current values, if type, quantity and support are set.
    pub fn cart_line(&self) -> Option<CartLineItem> {
        CartLineItem::from_values(self.values())
    }

    pub fn is_complete(&self) -> bool {
        self.values().is_complete()
    }

    /// Number of times the view has been re-rendered.
    pub fn renders(&self) -> usize {
        self.state.observer().renders()
    }
}
