//! Display implementations for domain models.

use std::fmt;

use crate::{
    gate::Visibility,
    models::{CartLineItem, Catalog, CatalogEntry, Step},
};

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CartLineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.product_id(), self.quantity)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |steps: &[Step]| {
            steps
                .iter()
                .map(Step::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "shown: [{}]", join(self.shown))?;
        write!(f, " hidden: [{}]", join(self.hidden))
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {}", self.value, self.name)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Catalog")?;
        writeln!(f)?;
        writeln!(f, "## Product types")?;
        writeln!(f)?;
        for entry in &self.product_types {
            writeln!(f, "- {entry}")?;
        }

        writeln!(f)?;
        writeln!(f, "## Support tiers")?;
        writeln!(f)?;
        if self.support_tiers.is_empty() {
            writeln!(f, "No support tiers listed.")?;
        }
        for entry in &self.support_tiers {
            writeln!(f, "- {entry}")?;
        }
        Ok(())
    }
}
