//! Derived cart line item.

use serde::{Deserialize, Serialize};

use super::Step;
use crate::state::StepValues;

/// Cart line item derived from the type, quantity and support steps.
///
/// Formats as `uai-<support>-<type> x <quantity>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CartLineItem {
    /// Selected product type value
    pub product_type: String,

    /// Selected quantity, as entered
    pub quantity: String,

    /// Selected support tier value
    pub support: String,
}

impl CartLineItem {
    /// Builds the line item from the current step values.
    ///
    /// Returns `None` unless type, quantity and support are all set to a
    /// non-empty value.
    pub fn from_values(values: &StepValues) -> Option<Self> {
        Some(Self {
            product_type: values.get(Step::Type)?.to_string(),
            quantity: values.get(Step::Quantity)?.to_string(),
            support: values.get(Step::Support)?.to_string(),
        })
    }

    /// Product identifier without the quantity suffix.
    pub fn product_id(&self) -> String {
        format!("uai-{}-{}", self.support, self.product_type)
    }

    /// Text written to the form's summary element.
    pub fn summary_text(&self) -> String {
        format!("Your selected product id is {self}")
    }
}
