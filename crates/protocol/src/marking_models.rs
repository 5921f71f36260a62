//! Per-item presentation output.
//!
//! A [`StepMarking`] is everything a host needs to apply to one step item
//! after a resolution: the classification tag and the accessibility
//! metadata that goes with it.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

use crate::step_models::StepState;

/// How the accessibility label of a completed step is written.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    /// The bare word `"completed"`.
    Plain,

    /// The item's own label followed by `" (completed)"`.
    #[default]
    Descriptive,
}

impl LabelFormat {
    /// Builds the completed label from the item's original text.
    ///
    /// The result is always derived from `base_label`, never from a label
    /// produced by an earlier call, so repeated application is stable.
    pub fn completed_label(self, base_label: &str) -> String {
        match self {
            LabelFormat::Plain => "completed".to_string(),
            LabelFormat::Descriptive => {
                let base = base_label.trim();
                if base.is_empty() {
                    "completed".to_string()
                } else {
                    format!("{base} (completed)")
                }
            }
        }
    }
}

/// Visual and accessibility state for one step item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct StepMarking {
    /// Classification tag.
    pub state: StepState,

    /// Set only on the active item.
    pub aria_current: bool,

    /// Set only on completed items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl StepMarking {
    /// Marking for an item that has never been resolved.
    pub fn pending() -> Self {
        Self {
            state: StepState::Pending,
            aria_current: false,
            aria_label: None,
        }
    }

    /// Derives the full marking for `state`.
    pub fn for_state(state: StepState, base_label: &str, format: LabelFormat) -> Self {
        match state {
            StepState::Pending => Self::pending(),
            StepState::Active => Self {
                state,
                aria_current: true,
                aria_label: None,
            },
            StepState::Completed => Self {
                state,
                aria_current: false,
                aria_label: Some(format.completed_label(base_label)),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == StepState::Active
    }

    pub fn is_completed(&self) -> bool {
        self.state == StepState::Completed
    }
}

impl Default for StepMarking {
    fn default() -> Self {
        Self::pending()
    }
}
