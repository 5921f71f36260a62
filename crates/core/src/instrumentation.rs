//! Performance marks and measures.
//!
//! A [`Track`] names one component's lane inside a track group. Marks record
//! an instant; measures report the time between two marks (or between a
//! mark and now). Both are emitted as `tracing` events carrying the track
//! metadata so that a subscriber can lay them out per component.

use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;

/// Track group used when a component does not name its own.
pub const DEFAULT_TRACK_GROUP: &str = "Step indicator";

/// Entry type attached to every mark and measure.
const DATA_TYPE: &str = "track-entry";

/// A named instrumentation lane.
#[derive(Debug, Clone)]
pub struct Track {
    name: String,
    group: String,
    marks: HashMap<String, Instant>,
}

impl Track {
    /// Creates a track in the default group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: DEFAULT_TRACK_GROUP.to_string(),
            marks: HashMap::new(),
        }
    }

    /// Places the track in another group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Records `mark` at the current instant, replacing an earlier mark of
    /// the same name.
    pub fn mark(&mut self, mark: &str) {
        self.marks.insert(mark.to_string(), Instant::now());
        tracing::trace!(
            data_type = DATA_TYPE,
            track = %self.name,
            track_group = %self.group,
            mark,
            "performance mark"
        );
    }

    /// Reports the time from `start_mark` to `end_mark`, or to now when
    /// `end_mark` is `None`.
    ///
    /// Returns `None` when either mark was never recorded.
    pub fn measure(
        &self,
        measure: &str,
        start_mark: &str,
        end_mark: Option<&str>,
    ) -> Option<Duration> {
        let Some(start) = self.marks.get(start_mark) else {
            tracing::debug!(track = %self.name, measure, start_mark, "measure skipped: unknown start mark");
            return None;
        };
        let end = match end_mark {
            Some(end_mark) => *self.marks.get(end_mark)?,
            None => Instant::now(),
        };

        let elapsed = end.saturating_duration_since(*start);
        tracing::debug!(
            data_type = DATA_TYPE,
            track = %self.name,
            track_group = %self.group,
            measure,
            elapsed_us = micros(elapsed),
            "performance measure"
        );
        Some(elapsed)
    }

    /// Forgets every recorded mark.
    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`.
fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let track = Track::new("StepIndicator");
        assert_eq!(track.name(), "StepIndicator");
        assert_eq!(track.group(), DEFAULT_TRACK_GROUP);

        let track = track.with_group("Checkout");
        assert_eq!(track.group(), "Checkout");
    }

    #[test]
    fn test_measure_between_marks() {
        let mut track = Track::new("StepIndicator");
        track.mark("start");
        track.mark("end");

        assert!(track.measure("span", "start", Some("end")).is_some());
        assert!(track.measure("open", "start", None).is_some());
    }

    #[test]
    fn test_measure_with_unknown_marks() {
        let mut track = Track::new("StepIndicator");
        assert_eq!(track.measure("span", "missing", None), None);

        track.mark("start");
        assert_eq!(track.measure("span", "start", Some("missing")), None);

        track.clear();
        assert_eq!(track.measure("span", "start", None), None);
    }

    #[test]
    fn test_micros_saturates() {
        assert_eq!(micros(Duration::from_millis(3)), 3_000);
        assert_eq!(micros(Duration::MAX), u64::MAX);
    }
}
