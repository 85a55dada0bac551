//! Whole-form report combining step values with what the form shows.

use std::fmt;

use serde::Serialize;

use crate::{
    form::FormSnapshot,
    models::{CartLineItem, Catalog, Step},
    selector::ProductSelector,
    state::StepValues,
};

/// State of one step as seen by the user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct StepReport {
    pub step: Step,
    pub value: Option<String>,
    pub visible: bool,
    /// Class list of the step's wrapper element
    pub classes: String,
}

/// Snapshot of the whole form, used for terminal and JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct FormReport {
    pub steps: Vec<StepReport>,
    pub quantity_field: String,
    pub type_label: String,
    /// Catalog name of the selected support tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_name: Option<String>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_line: Option<CartLineItem>,
    pub complete: bool,
}

impl FormReport {
    pub fn new(values: &StepValues, form: &FormSnapshot, catalog: &Catalog) -> Self {
        let steps = values
            .iter()
            .map(|(step, value)| StepReport {
                step,
                value: value.map(str::to_string),
                visible: !form.is_hidden(step),
                classes: form.wrapper_classes(step),
            })
            .collect();

        Self {
            steps,
            quantity_field: form.quantity_field.clone(),
            type_label: form.type_label.clone(),
            support_name: values
                .get(Step::Support)
                .and_then(|support| catalog.support_name(support))
                .map(str::to_string),
            summary: form.summary.clone(),
            cart_line: CartLineItem::from_values(values),
            complete: values.is_complete(),
        }
    }

    pub fn from_selector(selector: &ProductSelector<FormSnapshot>) -> Self {
        Self::new(selector.values(), selector.view(), selector.catalog())
    }
}

impl fmt::Display for FormReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Product selection")?;
        writeln!(f)?;

        for report in &self.steps {
            let marker = if report.visible { "▸" } else { "·" };
            match (&report.value, report.visible) {
                (Some(value), true) => writeln!(f, "{marker} **{}**: {value}", report.step)?,
                (None, true) => writeln!(f, "{marker} **{}**: _pending_", report.step)?,
                (_, false) => writeln!(f, "{marker} {} (hidden)", report.step)?,
            }
        }

        if !self.type_label.is_empty() {
            writeln!(f)?;
            writeln!(f, "- Counting: {}", self.type_label)?;
        }

        if let Some(name) = &self.support_name {
            writeln!(f, "- Support tier: {name}")?;
        }

        if !self.summary.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.summary)?;
        }

        if self.complete {
            writeln!(f)?;
            writeln!(f, "Selection complete.")?;
        }

        Ok(())
    }
}
