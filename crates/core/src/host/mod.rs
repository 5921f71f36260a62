//! Presentation sink abstraction.
//!
//! A host owns the displayed step items. It hands out their handles in
//! display order, applies a [`StepMarking`] to each one, and reports
//! structural changes to its list while a [`Subscription`] is held.
//!
//! The [`StepIndicator`](crate::indicator::StepIndicator) controller is the
//! only caller of these methods.

pub mod memory;

pub use memory::MemoryHost;

use si_protocol::StepMarking;

/// Token for a list-change subscription.
///
/// Hosts mint tokens in [`StepHost::subscribe`] and invalidate them in
/// [`StepHost::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// A surface that displays steps.
pub trait StepHost {
    /// Opaque reference to one displayed step.
    type Handle;

    /// All step handles, in display order.
    fn current_items(&self) -> Vec<Self::Handle>;

    /// The item's original text, before any marking was applied.
    ///
    /// Completed labels are always derived from this value.
    fn base_label(&self, handle: &Self::Handle) -> String;

    /// Applies a marking to one item.
    ///
    /// Implementations must replace the item's previous marking entirely:
    /// a pending marking clears active and completed state along with the
    /// accessibility label, an active marking clears any completed label.
    fn apply(&mut self, handle: &Self::Handle, marking: &StepMarking);

    /// Starts reporting list changes.
    fn subscribe(&mut self) -> Subscription;

    /// Stops reporting list changes for `subscription`.
    fn unsubscribe(&mut self, subscription: Subscription);

    /// Returns `true` once for each batch of structural changes made while
    /// `subscription` was held, for hosts that are polled rather than
    /// calling back.
    fn take_list_change(&mut self, subscription: Subscription) -> bool;
}
