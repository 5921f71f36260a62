//! A host that records every call the controller makes.

use si_core::StepHost;
use si_core::Subscription;
use si_protocol::StepMarking;
use si_protocol::StepState;
use std::collections::BTreeSet;

/// Opaque item identity, deliberately unrelated to position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// A displayed item with class-list style markings.
#[derive(Debug, Clone, Default)]
pub struct Item {
    pub text: String,
    pub classes: BTreeSet<&'static str>,
    pub aria_current: bool,
    pub aria_label: Option<String>,
}

impl Item {
    pub fn state(&self) -> StepState {
        if self.classes.contains("active") {
            StepState::Active
        } else if self.classes.contains("completed") {
            StepState::Completed
        } else {
            StepState::Pending
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    items: Vec<(ItemId, Item)>,
    next_id: u32,
    next_subscription: u64,
    pub live_subscriptions: BTreeSet<u64>,
    pub subscribe_calls: usize,
    pub unsubscribe_calls: usize,
    pub apply_calls: usize,
    pending_change: bool,
}

impl RecordingHost {
    pub fn with_labels(labels: &[&str]) -> Self {
        let mut host = Self::default();
        for label in labels {
            host.insert(label);
        }
        host
    }

    fn insert(&mut self, label: &str) {
        // Ids run backwards so that identity never matches position.
        self.next_id += 1;
        let id = ItemId(1000 - self.next_id);
        self.items.push((
            id,
            Item {
                text: label.to_string(),
                ..Item::default()
            },
        ));
    }

    /// Appends an item and notifies subscribers.
    pub fn add(&mut self, label: &str) {
        self.insert(label);
        self.pending_change = !self.live_subscriptions.is_empty();
    }

    /// Removes the last item and notifies subscribers.
    pub fn remove_last(&mut self) {
        self.items.pop();
        self.pending_change = !self.live_subscriptions.is_empty();
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().map(|(_, item)| item)
    }

    pub fn states(&self) -> Vec<StepState> {
        self.items().map(Item::state).collect()
    }

    pub fn labels(&self) -> Vec<Option<String>> {
        self.items().map(|item| item.aria_label.clone()).collect()
    }

    pub fn current_flags(&self) -> Vec<bool> {
        self.items().map(|item| item.aria_current).collect()
    }
}

impl StepHost for RecordingHost {
    type Handle = ItemId;

    fn current_items(&self) -> Vec<ItemId> {
        self.items.iter().map(|(id, _)| *id).collect()
    }

    fn base_label(&self, handle: &ItemId) -> String {
        self.items
            .iter()
            .find(|(id, _)| id == handle)
            .map(|(_, item)| item.text.clone())
            .unwrap_or_default()
    }

    fn apply(&mut self, handle: &ItemId, marking: &StepMarking) {
        self.apply_calls += 1;
        let Some((_, item)) = self.items.iter_mut().find(|(id, _)| id == handle) else {
            return;
        };

        item.classes.remove("active");
        item.aria_current = false;
        match marking.state {
            StepState::Active => {
                item.classes.insert("active");
                item.classes.remove("completed");
                item.aria_current = marking.aria_current;
                item.aria_label = None;
            }
            StepState::Completed => {
                item.classes.insert("completed");
                item.aria_label = marking.aria_label.clone();
            }
            StepState::Pending => {
                item.classes.remove("completed");
                item.aria_label = None;
            }
        }
    }

    fn subscribe(&mut self) -> Subscription {
        self.subscribe_calls += 1;
        self.next_subscription += 1;
        self.live_subscriptions.insert(self.next_subscription);
        Subscription::new(self.next_subscription)
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.unsubscribe_calls += 1;
        self.live_subscriptions.remove(&subscription.id());
    }

    fn take_list_change(&mut self, subscription: Subscription) -> bool {
        if !self.live_subscriptions.contains(&subscription.id()) {
            return false;
        }
        std::mem::take(&mut self.pending_change)
    }
}
