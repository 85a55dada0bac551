//! Result of handling one input event.

use serde::Serialize;

use super::{CartLineItem, Step};
use crate::gate::Visibility;

/// Explicit state change produced by [`crate::ProductSelector::handle_input`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InputOutcome {
    /// Step the event was addressed to
    pub step: Step,

    /// Whether the value was recorded. Only a rejected quantity is `false`.
    pub accepted: bool,

    /// Visibility after the event, `None` when every step is set
    pub visibility: Option<Visibility>,

    /// Recomputed line item, present only after a support selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_line: Option<CartLineItem>,

    /// Whether every step now holds a value
    pub complete: bool,
}
