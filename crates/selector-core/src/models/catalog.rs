//! Product catalog used to label the form.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IoResultExt, Result, SelectorError};

/// A selectable option: the value submitted by the form and its display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub value: String,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

/// Product types and support tiers offered by the form.
///
/// The catalog only supplies labels. Input values are never checked against
/// it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub product_types: Vec<CatalogEntry>,
    #[serde(default)]
    pub support_tiers: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            product_types: vec![
                CatalogEntry::new("physical-server", "Physical server"),
                CatalogEntry::new("virtual-server", "Virtual server"),
                CatalogEntry::new("desktop", "Desktop"),
            ],
            support_tiers: vec![
                CatalogEntry::new("essential", "Essential"),
                CatalogEntry::new("standard", "Standard"),
                CatalogEntry::new("advanced", "Advanced"),
            ],
        }
    }
}

impl Catalog {
    /// Parses and validates a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::FileSystem` if the file cannot be read,
    /// `SelectorError::Serialization` if it is not valid catalog JSON and
    /// `SelectorError::Configuration` if entries are empty or duplicated.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).with_path(path)?;
        Self::from_json_str(&json)
    }

    /// Display name of a product type, if the catalog knows it.
    pub fn product_name(&self, value: &str) -> Option<&str> {
        Self::lookup(&self.product_types, value)
    }

    /// Display name of a support tier, if the catalog knows it.
    pub fn support_name(&self, value: &str) -> Option<&str> {
        Self::lookup(&self.support_tiers, value)
    }

    fn lookup<'a>(entries: &'a [CatalogEntry], value: &str) -> Option<&'a str> {
        entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.name.as_str())
    }

    fn validate(&self) -> Result<()> {
        if self.product_types.is_empty() {
            return Err(SelectorError::configuration(
                "catalog must list at least one product type",
            ));
        }

        for (section, entries) in [
            ("product_types", &self.product_types),
            ("support_tiers", &self.support_tiers),
        ] {
            let mut seen = HashSet::new();
            for entry in entries {
                if entry.value.trim().is_empty() {
                    return Err(SelectorError::configuration(format!(
                        "empty value in {section}"
                    )));
                }
                if !seen.insert(entry.value.as_str()) {
                    return Err(SelectorError::configuration(format!(
                        "duplicate value '{}' in {section}",
                        entry.value
                    )));
                }
            }
        }

        Ok(())
    }
}
