//! Step activation: which form sections are shown.
//!
//! Steps up to and including the first unset step are shown; every step
//! after it is hidden. Once all steps hold a value the gate reports nothing
//! and the form is left as it was.

use serde::Serialize;

use crate::{
    form::FormView,
    models::Step,
    state::{StateObserver, StepValues},
};

/// Partition of the form's steps into shown and hidden sections.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Visibility {
    pub shown: &'static [Step],
    pub hidden: &'static [Step],
}

impl Visibility {
    pub fn is_shown(&self, step: Step) -> bool {
        self.shown.contains(&step)
    }

    /// The step the user is expected to fill in next.
    pub fn boundary(&self) -> Option<Step> {
        self.shown.last().copied()
    }
}

/// Derives the visible prefix of steps from the current values.
pub struct StepGate;

impl StepGate {
    /// Returns the visibility for `values`, or `None` when every step is set.
    pub fn evaluate(values: &StepValues) -> Option<Visibility> {
        let boundary = values.first_unset()?;
        let (shown, hidden) = Step::ALL.split_at(boundary.index() + 1);
        Some(Visibility { shown, hidden })
    }
}

/// Observer that applies the gate to a [`FormView`] after each state change.
#[derive(Debug)]
pub struct GateRenderer<V> {
    view: V,
    renders: usize,
}

impl<V: FormView> GateRenderer<V> {
    pub fn new(view: V) -> Self {
        Self { view, renders: 0 }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Number of times the observer has been notified.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl<V: FormView> StateObserver for GateRenderer<V> {
    fn state_changed(&mut self, values: &StepValues) {
        self.renders += 1;
        if let Some(visibility) = StepGate::evaluate(values) {
            self.view.show_steps(visibility.shown);
            self.view.hide_steps(visibility.hidden);
        }
    }
}
