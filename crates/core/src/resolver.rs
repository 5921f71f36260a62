//! Step state resolution.
//!
//! Classification depends only on the current index and the number of
//! steps. Step `n` (1-based) is active when `n == index`, completed when
//! `n < index` and pending when `n > index`. Nothing here touches a host,
//! and nothing is remembered between calls.

use si_protocol::StepIndex;
use si_protocol::StepState;
use std::cmp::Ordering;

/// Outcome of resolving a step list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// One state per step, in list order.
    Apply(Vec<StepState>),

    /// The index was not usable. Hosts must leave their current state as is.
    Skip,
}

impl Resolution {
    /// Returns the states to apply, or `None` for a skip.
    pub fn states(&self) -> Option<&[StepState]> {
        match self {
            Resolution::Apply(states) => Some(states),
            Resolution::Skip => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Resolution::Skip)
    }
}

/// State of the step at 0-based `position` for `index`.
pub fn state_at(index: StepIndex, position: usize) -> StepState {
    // Positions beyond i64 are always after any index.
    let number = match i64::try_from(position) {
        Ok(position) => position.saturating_add(1),
        Err(_) => return StepState::Pending,
    };

    match number.cmp(&index.get()) {
        Ordering::Equal => StepState::Active,
        Ordering::Less => StepState::Completed,
        Ordering::Greater => StepState::Pending,
    }
}

/// Classifies `len` steps for a valid `index`.
pub fn classify(index: StepIndex, len: usize) -> Vec<StepState> {
    (0..len).map(|position| state_at(index, position)).collect()
}

/// Resolves the states of `items` for `index`.
///
/// `None` stands for an unset or non-numeric index and yields
/// [`Resolution::Skip`]; a usable index over an empty list yields an empty
/// classification.
pub fn resolve<T>(index: Option<StepIndex>, items: &[T]) -> Resolution {
    match index {
        Some(index) => Resolution::Apply(classify(index, items.len())),
        None => Resolution::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use si_protocol::StepState::Active;
    use si_protocol::StepState::Completed;
    use si_protocol::StepState::Pending;

    fn states_for(index: i64, len: usize) -> Vec<StepState> {
        classify(StepIndex(index), len)
    }

    #[test]
    fn test_first_step_active() {
        assert_eq!(states_for(1, 3), vec![Active, Pending, Pending]);
    }

    #[test]
    fn test_middle_step_active() {
        assert_eq!(states_for(2, 3), vec![Completed, Active, Pending]);
    }

    #[test]
    fn test_index_past_end_completes_everything() {
        assert_eq!(states_for(5, 3), vec![Completed, Completed, Completed]);
        assert_eq!(states_for(4, 3), vec![Completed, Completed, Completed]);
    }

    #[test]
    fn test_zero_and_negative_leave_everything_pending() {
        assert_eq!(states_for(0, 3), vec![Pending, Pending, Pending]);
        assert_eq!(states_for(-7, 2), vec![Pending, Pending]);
        assert_eq!(states_for(i64::MIN, 1), vec![Pending]);
    }

    #[test]
    fn test_extreme_index() {
        assert_eq!(states_for(i64::MAX, 2), vec![Completed, Completed]);
    }

    #[test]
    fn test_empty_list() {
        let items: [&str; 0] = [];
        assert_eq!(resolve(Some(StepIndex(3)), &items), Resolution::Apply(vec![]));
        assert_eq!(resolve(Some(StepIndex(-1)), &items), Resolution::Apply(vec![]));
    }

    #[test]
    fn test_missing_index_skips() {
        let items = ["Cart", "Shipping", "Payment"];
        let resolution = resolve(None, &items);
        assert!(resolution.is_skip());
        assert_eq!(resolution.states(), None);
    }

    #[test]
    fn test_resolve_matches_item_count() {
        let items = ["Cart", "Shipping"];
        let resolution = resolve(Some(StepIndex(2)), &items);
        assert_eq!(resolution.states(), Some(&[Completed, Active][..]));
    }

    #[test]
    fn test_state_at() {
        assert_eq!(state_at(StepIndex(2), 0), Completed);
        assert_eq!(state_at(StepIndex(2), 1), Active);
        assert_eq!(state_at(StepIndex(2), 2), Pending);
    }
}
