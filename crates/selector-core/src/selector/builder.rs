//! Builder for creating and configuring ProductSelector instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::ProductSelector;
use crate::{error::Result, form::FormView, models::Catalog};

/// Name of the catalog file looked up under the XDG config directory.
const CATALOG_FILE: &str = "catalog.json";

/// Builder for creating and configuring ProductSelector instances.
#[derive(Debug, Clone, Default)]
pub struct SelectorBuilder {
    catalog_path: Option<PathBuf>,
    catalog: Option<Catalog>,
}

impl SelectorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a catalog file to load.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/selector/catalog.json` when
    /// that file exists and the built-in catalog otherwise.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded catalog, ignoring any catalog path.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Resolves the catalog without building a selector.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::FileSystem` if an explicit catalog path cannot
    /// be read, `SelectorError::Serialization` or
    /// `SelectorError::Configuration` if the catalog file is invalid.
    pub fn load_catalog(&self) -> Result<Catalog> {
        if let Some(catalog) = &self.catalog {
            return Ok(catalog.clone());
        }

        if let Some(path) = &self.catalog_path {
            debug!("Loading catalog from {}", path.display());
            return Catalog::load(path);
        }

        match Self::default_catalog_path() {
            Some(path) => {
                debug!("Loading catalog from {}", path.display());
                Catalog::load(&path)
            }
            None => {
                debug!("No catalog file found, using built-in catalog");
                Ok(Catalog::default())
            }
        }
    }

    /// Builds a selector rendering to `view`.
    ///
    /// The view receives the initial visibility before this returns.
    pub fn build<V: FormView>(self, view: V) -> Result<ProductSelector<V>> {
        let catalog = self.load_catalog()?;
        Ok(ProductSelector::new(view, catalog))
    }

    /// Returns the catalog file under the XDG config directories, if present.
    fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("selector").find_config_file(CATALOG_FILE)
    }
}
