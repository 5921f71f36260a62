//! In-memory host.
//!
//! Keeps step labels and markings in a `Vec`. Used by the command line
//! renderer and anywhere a host without a display is needed.

use super::StepHost;
use super::Subscription;
use si_protocol::StepMarking;

/// One step held by [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStep {
    /// Original text of the step.
    pub label: String,
    /// Marking applied by the last resolution.
    pub marking: StepMarking,
}

/// A host backed by a vector of steps.
///
/// Handles are positions in the vector. Structural changes set a change
/// flag only while a subscription is active.
#[derive(Debug, Default)]
pub struct MemoryHost {
    steps: Vec<MemoryStep>,
    subscription: Option<Subscription>,
    next_subscription: u64,
    list_changed: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host with one pending step per label.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut host = Self::new();
        host.steps = labels.into_iter().map(new_step).collect();
        host
    }

    pub fn steps(&self) -> &[MemoryStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether a subscription is currently held.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Appends a pending step.
    pub fn push_step(&mut self, label: impl Into<String>) {
        self.steps.push(new_step(label));
        self.mark_changed();
    }

    /// Removes and returns the last step.
    pub fn pop_step(&mut self) -> Option<MemoryStep> {
        let step = self.steps.pop();
        if step.is_some() {
            self.mark_changed();
        }
        step
    }

    /// Replaces every step.
    pub fn replace_steps<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = labels.into_iter().map(new_step).collect();
        self.mark_changed();
    }

    fn mark_changed(&mut self) {
        if self.subscription.is_some() {
            self.list_changed = true;
        }
    }
}

fn new_step(label: impl Into<String>) -> MemoryStep {
    MemoryStep {
        label: label.into(),
        marking: StepMarking::pending(),
    }
}

impl StepHost for MemoryHost {
    type Handle = usize;

    fn current_items(&self) -> Vec<usize> {
        (0..self.steps.len()).collect()
    }

    fn base_label(&self, handle: &usize) -> String {
        self.steps
            .get(*handle)
            .map(|step| step.label.clone())
            .unwrap_or_default()
    }

    fn apply(&mut self, handle: &usize, marking: &StepMarking) {
        if let Some(step) = self.steps.get_mut(*handle) {
            step.marking = marking.clone();
        }
    }

    fn subscribe(&mut self) -> Subscription {
        self.next_subscription += 1;
        let subscription = Subscription::new(self.next_subscription);
        self.subscription = Some(subscription);
        self.list_changed = false;
        subscription
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        if self.subscription == Some(subscription) {
            self.subscription = None;
            self.list_changed = false;
        }
    }

    fn take_list_change(&mut self, subscription: Subscription) -> bool {
        if self.subscription != Some(subscription) {
            return false;
        }
        std::mem::take(&mut self.list_changed)
    }
}
