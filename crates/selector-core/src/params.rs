//! Parameter structures for selector operations
//!
//! These structures carry input events from any front end (the CLI, a test
//! harness, a page binding) into the core without framework-specific derives.
//! Interface layers parse their own argument formats and convert into these
//! types.

use std::str::FromStr;

use crate::error::SelectorError;

/// One input event from the form: the field's name and its new value.
///
/// `product_name` mirrors the display name a product-type input carries
/// alongside its value. When absent the catalog supplies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub value: String,
    pub product_name: Option<String>,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            product_name: None,
        }
    }

    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }
}

impl FromStr for FieldInput {
    type Err = SelectorError;

    /// Parses `name=value`. Only the first `=` separates; the value may
    /// contain further `=` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, value)) = s.split_once('=') else {
            return Err(SelectorError::invalid_input("event")
                .with_reason(format!("expected name=value, got '{s}'")));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(SelectorError::invalid_input("event")
                .with_reason(format!("missing field name in '{s}'")));
        }

        Ok(Self::new(name, value.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event() {
        let input: FieldInput = "quantity = 3".parse().unwrap();
        assert_eq!(input, FieldInput::new("quantity", "3"));
    }

    #[test]
    fn test_parse_keeps_extra_equals() {
        let input: FieldInput = "add=a=b".parse().unwrap();
        assert_eq!(input.value, "a=b");
    }

    #[test]
    fn test_parse_empty_value() {
        let input: FieldInput = "quantity=".parse().unwrap();
        assert_eq!(input.value, "");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "quantity".parse::<FieldInput>(),
            Err(SelectorError::InvalidInput { .. })
        ));
        assert!(matches!(
            "=3".parse::<FieldInput>(),
            Err(SelectorError::InvalidInput { .. })
        ));
    }
}
