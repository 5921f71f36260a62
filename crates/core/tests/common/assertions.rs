//! Custom assertion helpers over applied markings.

use si_protocol::StepState;

use super::RecordingHost;

/// Assert the class-list state of every item, in order.
#[allow(dead_code)]
pub fn assert_states(host: &RecordingHost, expected: &[StepState]) {
    assert_eq!(host.states(), expected, "unexpected step states");
}

/// Assert that accessibility metadata agrees with the class list:
/// `aria_current` only on the active item, a label only on completed items.
#[allow(dead_code)]
pub fn assert_accessibility_consistent(host: &RecordingHost) {
    for item in host.items() {
        let state = item.state();
        assert_eq!(
            item.aria_current,
            state == StepState::Active,
            "aria_current mismatch on {:?}",
            item.text
        );
        assert_eq!(
            item.aria_label.is_some(),
            state == StepState::Completed,
            "aria_label mismatch on {:?}",
            item.text
        );
    }
}
