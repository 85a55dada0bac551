//! The form collaborator: everything the stepper writes to the page.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Step;

/// Class toggled on a step wrapper to hide it.
pub const HIDDEN_CLASS: &str = "u-hide";

/// Write side of the product form.
///
/// Implementations own the actual page elements: one wrapper per step, the
/// quantity input, the type label and the summary line.
pub trait FormView {
    /// Removes the hidden class from each step's wrapper.
    fn show_steps(&mut self, steps: &[Step]);

    /// Adds the hidden class to each step's wrapper.
    fn hide_steps(&mut self, steps: &[Step]);

    fn set_quantity_field(&mut self, value: &str);

    fn set_type_label(&mut self, label: &str);

    fn set_summary(&mut self, text: &str);
}

impl<V: FormView + ?Sized> FormView for &mut V {
    fn show_steps(&mut self, steps: &[Step]) {
        (**self).show_steps(steps);
    }

    fn hide_steps(&mut self, steps: &[Step]) {
        (**self).hide_steps(steps);
    }

    fn set_quantity_field(&mut self, value: &str) {
        (**self).set_quantity_field(value);
    }

    fn set_type_label(&mut self, label: &str) {
        (**self).set_type_label(label);
    }

    fn set_summary(&mut self, text: &str) {
        (**self).set_summary(text);
    }
}

/// In-memory form used by the CLI and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct FormSnapshot {
    /// Steps whose wrapper currently carries the hidden class
    pub hidden: BTreeSet<Step>,

    /// Contents of the quantity input
    pub quantity_field: String,

    /// Pluralised product name shown next to the quantity input
    pub type_label: String,

    /// Summary line with the selected product id
    pub summary: String,
}

impl FormSnapshot {
    pub fn is_hidden(&self, step: Step) -> bool {
        self.hidden.contains(&step)
    }

    /// Shown steps in form order.
    pub fn visible_steps(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| !self.is_hidden(*step))
            .collect()
    }

    /// Class list of a step's wrapper element.
    pub fn wrapper_classes(&self, step: Step) -> String {
        if self.is_hidden(step) {
            format!("{} {HIDDEN_CLASS}", step.wrapper_class())
        } else {
            step.wrapper_class()
        }
    }
}

impl FormView for FormSnapshot {
    fn show_steps(&mut self, steps: &[Step]) {
        for step in steps {
            self.hidden.remove(step);
        }
    }

    fn hide_steps(&mut self, steps: &[Step]) {
        self.hidden.extend(steps.iter().copied());
    }

    fn set_quantity_field(&mut self, value: &str) {
        self.quantity_field = value.to_string();
    }

    fn set_type_label(&mut self, label: &str) {
        self.type_label = label.to_string();
    }

    fn set_summary(&mut self, text: &str) {
        self.summary = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_hide() {
        let mut form = FormSnapshot::default();
        form.hide_steps(&[Step::Support, Step::Add]);
        assert_eq!(form.visible_steps(), vec![Step::Type, Step::Quantity]);

        form.show_steps(&[Step::Support]);
        assert!(!form.is_hidden(Step::Support));
        assert!(form.is_hidden(Step::Add));
    }

    #[test]
    fn test_wrapper_classes() {
        let mut form = FormSnapshot::default();
        form.hide_steps(&[Step::Add]);
        assert_eq!(form.wrapper_classes(Step::Add), "js-shop-step--add u-hide");
        assert_eq!(form.wrapper_classes(Step::Type), "js-shop-step--type");
    }

    #[test]
    fn test_mut_ref_is_a_view() {
        fn label<V: FormView>(mut view: V) {
            view.set_type_label("Desktops");
        }

        let mut form = FormSnapshot::default();
        label(&mut form);
        assert_eq!(form.type_label, "Desktops");
    }
}
