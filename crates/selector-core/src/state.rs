//! Per-step value storage with change notification.
//!
//! [`StepState`] holds zero or one value for each [`Step`] and notifies its
//! [`StateObserver`] synchronously after every mutation. Rendering the form
//! is one such observer (see [`crate::gate::GateRenderer`]).

use serde::Serialize;

use crate::models::Step;

/// Current value of every step, indexed in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepValues {
    values: [Option<String>; Step::COUNT],
}

impl StepValues {
    /// Value of a step, or `None` when it has not been completed.
    ///
    /// An empty value does not complete a step.
    pub fn get(&self, step: Step) -> Option<&str> {
        self.values[step.index()]
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    pub fn is_set(&self, step: Step) -> bool {
        self.get(step).is_some()
    }

    /// First step without a value, in form order.
    pub fn first_unset(&self) -> Option<Step> {
        Step::ALL.into_iter().find(|step| !self.is_set(*step))
    }

    /// True once every step holds a value.
    pub fn is_complete(&self) -> bool {
        self.first_unset().is_none()
    }

    /// Iterates over `(step, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Step, Option<&str>)> + '_ {
        Step::ALL.into_iter().map(move |step| (step, self.get(step)))
    }

    fn set(&mut self, step: Step, value: String) {
        self.values[step.index()] = Some(value);
    }

    fn clear(&mut self, step: Step) {
        self.values[step.index()] = None;
    }
}

/// Receives the step values after each mutation of a [`StepState`].
pub trait StateObserver {
    fn state_changed(&mut self, values: &StepValues);
}

impl<F> StateObserver for F
where
    F: FnMut(&StepValues),
{
    fn state_changed(&mut self, values: &StepValues) {
        self(values);
    }
}

/// Step values plus the observer notified when they change.
#[derive(Debug)]
pub struct StepState<O> {
    values: StepValues,
    observer: O,
}

impl<O: StateObserver> StepState<O> {
    /// Creates a state with every step unset. The observer is not notified
    /// until the first mutation or [`StepState::refresh`].
    pub fn new(observer: O) -> Self {
        Self {
            values: StepValues::default(),
            observer,
        }
    }

    pub fn get(&self, step: Step) -> Option<&str> {
        self.values.get(step)
    }

    /// Records a value for a step and notifies the observer.
    ///
    /// Later steps are left untouched; cascading is the caller's decision.
    pub fn set(&mut self, step: Step, value: impl Into<String>) {
        self.values.set(step, value.into());
        self.observer.state_changed(&self.values);
    }

    /// Clears a step and notifies the observer, even if it was already unset.
    pub fn reset(&mut self, step: Step) {
        self.values.clear(step);
        self.observer.state_changed(&self.values);
    }

    /// Notifies the observer without changing anything.
    pub fn refresh(&mut self) {
        self.observer.state_changed(&self.values);
    }

    pub fn values(&self) -> &StepValues {
        &self.values
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
