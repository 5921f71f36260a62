//! Step index and step state models.
//!
//! This module defines the values that drive classification: the raw
//! "current step" input as the host receives it, the validated 1-based
//! [`StepIndex`], and the per-item [`StepState`] tag.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

/// Classification assigned to a single step item.
///
/// Serialized in lower case so that the tag can be used directly as a
/// class or style key by presentation layers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    /// The step lies after the current step.
    Pending,

    /// The step is the current step.
    Active,

    /// The step lies before the current step.
    Completed,
}

impl StepState {
    /// Lower-case tag used for class names and plain-text output.
    pub fn as_str(self) -> &'static str {
        match self {
            StepState::Pending => "pending",
            StepState::Active => "active",
            StepState::Completed => "completed",
        }
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated 1-based current step.
///
/// Zero and negative values are valid indices: they classify every step as
/// pending. Values past the end of the list classify every step as completed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
pub struct StepIndex(pub i64);

impl StepIndex {
    /// The conventional first step.
    pub const FIRST: StepIndex = StepIndex(1);

    /// Returns the raw 1-based value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns the 0-based position of the active step, if the index names
    /// a position at all (`index >= 1`).
    pub fn position(self) -> Option<usize> {
        usize::try_from(self.0).ok().and_then(|n| n.checked_sub(1))
    }

    /// Index one step further along.
    pub fn next(self) -> StepIndex {
        StepIndex(self.0.saturating_add(1))
    }

    /// Index one step back.
    pub fn previous(self) -> StepIndex {
        StepIndex(self.0.saturating_sub(1))
    }
}

impl From<i64> for StepIndex {
    fn from(value: i64) -> Self {
        StepIndex(value)
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a raw step value is not a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepIndexError {
    /// The value has no leading integer.
    #[error("invalid step index {raw:?}: expected an integer")]
    Invalid { raw: String },
}

impl FromStr for StepIndex {
    type Err = StepIndexError;

    /// Parses a leading integer the way attribute values are read: leading
    /// whitespace is skipped, an optional sign is accepted, and anything
    /// after the digits is ignored (`"3rd"` is 3).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StepIndexError::Invalid { raw: s.to_string() };

        let trimmed = s.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return Err(invalid());
        }

        // Digit runs too long for i64 saturate.
        let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
        Ok(StepIndex(if negative { -magnitude } else { magnitude }))
    }
}

/// The "current step" value exactly as a host holds it.
///
/// A host may never have set the value (`Unset`), may hold something that
/// is not a number (`Invalid`), or may hold a usable index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, TS)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum RawStepIndex {
    /// No value has been supplied.
    #[default]
    Unset,

    /// A value was supplied but does not parse as an integer.
    Invalid(String),

    /// A parsed step value.
    Value(i64),
}

impl RawStepIndex {
    /// Interprets an attribute-style string. Never fails: an empty value
    /// counts as unset and non-numeric input becomes
    /// [`RawStepIndex::Invalid`].
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return RawStepIndex::Unset;
        }
        match raw.parse::<StepIndex>() {
            Ok(index) => RawStepIndex::Value(index.get()),
            Err(_) => RawStepIndex::Invalid(raw.to_string()),
        }
    }

    /// Returns the usable index, if any.
    pub fn index(&self) -> Option<StepIndex> {
        match self {
            RawStepIndex::Value(value) => Some(StepIndex(*value)),
            RawStepIndex::Unset | RawStepIndex::Invalid(_) => None,
        }
    }
}

impl From<StepIndex> for RawStepIndex {
    fn from(index: StepIndex) -> Self {
        RawStepIndex::Value(index.get())
    }
}

impl From<Option<&str>> for RawStepIndex {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(RawStepIndex::Unset, RawStepIndex::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!("1".parse::<StepIndex>(), Ok(StepIndex(1)));
        assert_eq!("42".parse::<StepIndex>(), Ok(StepIndex(42)));
        assert_eq!("0".parse::<StepIndex>(), Ok(StepIndex(0)));
        assert_eq!("-3".parse::<StepIndex>(), Ok(StepIndex(-3)));
        assert_eq!("+2".parse::<StepIndex>(), Ok(StepIndex(2)));
    }

    #[test]
    fn test_parse_ignores_surrounding_text() {
        assert_eq!("  7".parse::<StepIndex>(), Ok(StepIndex(7)));
        assert_eq!("3rd".parse::<StepIndex>(), Ok(StepIndex(3)));
        assert_eq!("2.9".parse::<StepIndex>(), Ok(StepIndex(2)));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["abc", "", "-", "+", " ", "x1"] {
            assert_eq!(
                raw.parse::<StepIndex>(),
                Err(StepIndexError::Invalid {
                    raw: raw.to_string()
                }),
                "{raw:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_parse_saturates_huge_values() {
        let huge = "99999999999999999999999";
        assert_eq!(huge.parse::<StepIndex>(), Ok(StepIndex(i64::MAX)));
    }

    #[test]
    fn test_position() {
        assert_eq!(StepIndex(1).position(), Some(0));
        assert_eq!(StepIndex(3).position(), Some(2));
        assert_eq!(StepIndex(0).position(), None);
        assert_eq!(StepIndex(-1).position(), None);
    }

    #[test]
    fn test_raw_step_index_from_optional_attribute() {
        assert_eq!(RawStepIndex::from(None), RawStepIndex::Unset);
        assert_eq!(RawStepIndex::from(Some("")), RawStepIndex::Unset);
        assert_eq!(RawStepIndex::from(Some("2")), RawStepIndex::Value(2));
        assert_eq!(
            RawStepIndex::from(Some(" ")),
            RawStepIndex::Invalid(" ".to_string())
        );
        assert_eq!(
            RawStepIndex::from(Some("abc")),
            RawStepIndex::Invalid("abc".to_string())
        );
        assert_eq!(RawStepIndex::Value(4).index(), Some(StepIndex(4)));
        assert_eq!(RawStepIndex::Unset.index(), None);
    }

    #[test]
    fn test_step_state_display() {
        assert_eq!(StepState::Pending.to_string(), "pending");
        assert_eq!(StepState::Active.to_string(), "active");
        assert_eq!(StepState::Completed.to_string(), "completed");
    }
}
