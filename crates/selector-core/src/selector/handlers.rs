//! Input handling for each step of the form.

use log::debug;

use super::ProductSelector;
use crate::{
    error::Result,
    form::FormView,
    models::{CartLineItem, InputOutcome, Step},
    params::FieldInput,
};

impl<V: FormView> ProductSelector<V> {
    /// Handles one input event from the form.
    ///
    /// - `type` clears the quantity field, relabels it with the pluralised
    ///   product name and records the value.
    /// - `quantity` is recorded only if it is a number greater than zero;
    ///   otherwise the quantity step is reset.
    /// - `support` records the value and recomputes the cart line item shown
    ///   in the summary.
    /// - `add` records the value.
    ///
    /// Recording a value resets every later step.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::UnknownStep` if the input does not name a step.
    pub fn handle_input(&mut self, input: &FieldInput) -> Result<InputOutcome> {
        let step: Step = input.name.parse()?;

        let mut cart_line = None;
        let accepted = match step {
            Step::Type => {
                self.handle_type(input);
                true
            }
            Step::Quantity => self.handle_quantity(&input.value),
            Step::Support => {
                self.record(step, &input.value);
                cart_line = self.update_cart_line();
                true
            }
            Step::Add => {
                self.record(step, &input.value);
                true
            }
        };

        Ok(InputOutcome {
            step,
            accepted,
            visibility: self.visibility(),
            cart_line,
            complete: self.is_complete(),
        })
    }

    fn handle_type(&mut self, input: &FieldInput) {
        let product_name = input
            .product_name
            .as_deref()
            .or_else(|| self.catalog.product_name(&input.value))
            .unwrap_or(&input.value);
        let label = format!("{product_name}s");

        let view = self.state.observer_mut().view_mut();
        view.set_quantity_field("0");
        view.set_type_label(&label);

        self.record(Step::Type, &input.value);
    }

    fn handle_quantity(&mut self, value: &str) -> bool {
        if is_valid_quantity(value) {
            self.record(Step::Quantity, value);
            true
        } else {
            debug!("Rejected quantity '{value}'");
            self.state.reset(Step::Quantity);
            false
        }
    }

    /// Records a value and resets every step after it.
    fn record(&mut self, step: Step, value: &str) {
        self.state.set(step, value);

        let subsequent = step.subsequent();
        if !subsequent.is_empty() {
            debug!(
                "Resetting {} step(s) after '{}'",
                subsequent.len(),
                step.as_str()
            );
        }
        for later in subsequent {
            self.state.reset(*later);
        }
    }

    /// Writes the current line item to the summary element.
    fn update_cart_line(&mut self) -> Option<CartLineItem> {
        let Some(line) = self.cart_line() else {
            debug!("Support selected before type and quantity; summary unchanged");
            return None;
        };

        self.state
            .observer_mut()
            .view_mut()
            .set_summary(&line.summary_text());
        Some(line)
    }
}

/// A quantity is valid when it parses as a finite number greater than zero.
pub fn is_valid_quantity(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|quantity| quantity.is_finite() && quantity > 0.0)
        .unwrap_or(false)
}
