//! Event handling types for the TUI.
//!
//! Widgets that take keyboard input return [`EventStatus`] so the caller
//! knows whether to fall through to the global key bindings.

/// Status of an event after being handled by a widget.
///
/// Widgets return this enum from their `handle_key_event` methods to indicate
/// whether the event was consumed or should be passed to the next handler in
/// the chain of responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The event was handled by the widget and should not be propagated further.
    Consumed,
    /// The event was not handled by the widget and should be passed to the next handler.
    NotConsumed,
}

impl EventStatus {
    pub fn is_consumed(self) -> bool {
        self == EventStatus::Consumed
    }
}
