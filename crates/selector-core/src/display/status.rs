//! Feedback line for a handled input event.

use std::fmt;

use crate::models::InputOutcome;

/// Wrapper type for displaying what happened to one input event.
pub struct InputStatus<'a> {
    pub outcome: &'a InputOutcome,
    pub value: &'a str,
}

impl<'a> InputStatus<'a> {
    pub fn new(outcome: &'a InputOutcome, value: &'a str) -> Self {
        Self { outcome, value }
    }
}

impl fmt::Display for InputStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.outcome.step;
        if self.outcome.accepted {
            write!(f, "Recorded: {step} = {}", self.value)?;
        } else {
            write!(
                f,
                "Ignored: {step} = {} (expected a number greater than 0)",
                self.value
            )?;
        }

        if let Some(line) = &self.outcome.cart_line {
            write!(f, " -> {line}")?;
        }
        if self.outcome.complete {
            write!(f, " (form complete)")?;
        }
        writeln!(f)
    }
}
