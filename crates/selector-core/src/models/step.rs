//! Step model definition and ordering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectorError;

/// One named stage of the product form.
///
/// Variants are declared in form order; later steps depend on every step
/// before them.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Product type (physical server, desktop, ...)
    Type,

    /// Number of machines
    Quantity,

    /// Support tier
    Support,

    /// Add-to-cart confirmation
    Add,
}

impl Step {
    /// Number of steps in the form.
    pub const COUNT: usize = 4;

    /// All steps in form order.
    pub const ALL: [Step; Self::COUNT] = [Step::Type, Step::Quantity, Step::Support, Step::Add];

    /// Position of the step within the form (0-indexed).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Steps that come after this one.
    pub fn subsequent(self) -> &'static [Step] {
        &Self::ALL[self.index() + 1..]
    }

    /// Input field name used by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Type => "type",
            Step::Quantity => "quantity",
            Step::Support => "support",
            Step::Add => "add",
        }
    }

    /// Class of the wrapper element whose visibility this step controls.
    pub fn wrapper_class(&self) -> String {
        format!("js-shop-step--{}", self.as_str())
    }
}

impl FromStr for Step {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(Step::Type),
            "quantity" => Ok(Step::Quantity),
            "support" => Ok(Step::Support),
            "add" => Ok(Step::Add),
            _ => Err(SelectorError::UnknownStep {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert!(Step::Type < Step::Add);
    }

    #[test]
    fn test_subsequent() {
        assert_eq!(
            Step::Type.subsequent(),
            &[Step::Quantity, Step::Support, Step::Add]
        );
        assert_eq!(Step::Support.subsequent(), &[Step::Add]);
        assert!(Step::Add.subsequent().is_empty());
    }

    #[test]
    fn test_parse() {
        assert_eq!("quantity".parse::<Step>().unwrap(), Step::Quantity);
        assert!(matches!(
            "Quantity".parse::<Step>(),
            Err(SelectorError::UnknownStep { .. })
        ));
    }

    #[test]
    fn test_wrapper_class() {
        assert_eq!(Step::Support.wrapper_class(), "js-shop-step--support");
    }
}
