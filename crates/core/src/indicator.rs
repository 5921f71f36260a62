//! Step indicator controller.
//!
//! [`StepIndicator`] binds the resolver to a [`StepHost`]. The host (or
//! whatever drives it) calls the lifecycle methods:
//!
//! - [`activate`](StepIndicator::activate) when the indicator is attached
//! - [`deactivate`](StepIndicator::deactivate) when it is detached
//! - [`on_index_changed`](StepIndicator::on_index_changed) when the current
//!   step value changes
//! - [`on_list_changed`](StepIndicator::on_list_changed) when items are
//!   added or removed
//!
//! Every trigger re-reads the host's items and resolves from scratch, so
//! the applied markings always match the latest index and list.

use si_protocol::IndicatorConfig;
use si_protocol::LabelFormat;
use si_protocol::RawStepIndex;
use si_protocol::StepIndex;
use si_protocol::StepMarking;
use si_protocol::StepState;

use crate::host::StepHost;
use crate::host::Subscription;
use crate::instrumentation::Track;
use crate::resolver;
use crate::resolver::Resolution;

/// What a trigger did to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Markings were applied; one state per item.
    Applied(Vec<StepState>),

    /// The current value is not a number; the host was left untouched.
    Skipped,

    /// The indicator is not attached; the trigger was ignored.
    Inactive,
}

/// Keeps a host's step markings in sync with the current step.
#[derive(Debug)]
pub struct StepIndicator<H: StepHost> {
    host: H,
    raw_index: RawStepIndex,
    default_step: StepIndex,
    label_format: LabelFormat,
    subscription: Option<Subscription>,
    track: Track,
}

impl<H: StepHost> StepIndicator<H> {
    /// Creates an inactive indicator with the default settings.
    pub fn new(host: H) -> Self {
        Self::with_config(host, &IndicatorConfig::default())
    }

    /// Creates an inactive indicator using the settings in `config`.
    pub fn with_config(host: H, config: &IndicatorConfig) -> Self {
        Self {
            host,
            raw_index: RawStepIndex::Unset,
            default_step: StepIndex(config.default_step),
            label_format: config.label_format,
            subscription: None,
            track: Track::new("StepIndicator"),
        }
    }

    /// Sets the step used when no value has been supplied.
    pub fn default_step(mut self, step: StepIndex) -> Self {
        self.default_step = step;
        self
    }

    /// Sets how completed items are labelled.
    pub fn label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = format;
        self
    }

    /// Sets the initial value without triggering a resolution.
    pub fn initial_index(mut self, raw: impl Into<RawStepIndex>) -> Self {
        self.raw_index = raw.into();
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the indicator, releasing any subscription first.
    pub fn into_host(mut self) -> H {
        self.deactivate();
        self.host
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// The step used when no value has been supplied.
    pub fn default_index(&self) -> StepIndex {
        self.default_step
    }

    /// The current value as last supplied.
    pub fn raw_index(&self) -> &RawStepIndex {
        &self.raw_index
    }

    /// The index resolutions currently use: the supplied value, the default
    /// when none was supplied, or `None` when the value is not a number.
    pub fn effective_index(&self) -> Option<StepIndex> {
        match &self.raw_index {
            RawStepIndex::Value(value) => Some(StepIndex(*value)),
            RawStepIndex::Unset => Some(self.default_step),
            RawStepIndex::Invalid(_) => None,
        }
    }

    /// Attaches the indicator: subscribes to list changes and applies the
    /// first classification.
    ///
    /// A missing or non-numeric value resolves with the default step here,
    /// so a freshly attached host is always fully marked. Activating an
    /// already active indicator resyncs like any other trigger, without
    /// subscribing again, so a non-numeric value leaves the markings alone.
    pub fn activate(&mut self) -> SyncOutcome {
        if self.subscription.is_some() {
            return self.sync();
        }

        let subscription = self.host.subscribe();
        tracing::debug!(subscription = subscription.id(), "step indicator activated");
        self.subscription = Some(subscription);

        let index = self.effective_index().unwrap_or(self.default_step);
        self.apply(Some(index))
    }

    /// Detaches the indicator and releases its subscription. Markings stay
    /// as they were.
    pub fn deactivate(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.host.unsubscribe(subscription);
            self.track.clear();
            tracing::debug!(subscription = subscription.id(), "step indicator deactivated");
        }
    }

    /// Records a new current value and resyncs.
    ///
    /// Accepts anything convertible to [`RawStepIndex`]: a [`StepIndex`],
    /// or an optional attribute string.
    pub fn on_index_changed(&mut self, raw: impl Into<RawStepIndex>) -> SyncOutcome {
        self.raw_index = raw.into();
        self.sync()
    }

    /// Parses `raw` as an attribute value and resyncs.
    pub fn set_step_attr(&mut self, raw: &str) -> SyncOutcome {
        self.on_index_changed(RawStepIndex::parse(raw))
    }

    /// Resyncs after the host's list changed shape.
    pub fn on_list_changed(&mut self) -> SyncOutcome {
        self.sync()
    }

    /// Resyncs if the host reports a list change on the held subscription.
    ///
    /// Returns `None` when nothing changed or the indicator is inactive.
    pub fn poll_list_changes(&mut self) -> Option<SyncOutcome> {
        let subscription = self.subscription?;
        if self.host.take_list_change(subscription) {
            Some(self.on_list_changed())
        } else {
            None
        }
    }

    fn sync(&mut self) -> SyncOutcome {
        if !self.is_active() {
            tracing::trace!("step indicator inactive, ignoring trigger");
            return SyncOutcome::Inactive;
        }
        self.apply(self.effective_index())
    }

    fn apply(&mut self, index: Option<StepIndex>) -> SyncOutcome {
        let items = self.host.current_items();

        self.track.mark("resolve:start");
        let resolution = resolver::resolve(index, &items);
        self.track.mark("resolve:end");
        self.track
            .measure("resolve", "resolve:start", Some("resolve:end"));

        let states = match resolution {
            Resolution::Apply(states) => states,
            Resolution::Skip => {
                tracing::debug!(raw = ?self.raw_index, "non-numeric step, keeping current markings");
                return SyncOutcome::Skipped;
            }
        };

        for (handle, state) in items.iter().zip(&states) {
            let base_label = self.host.base_label(handle);
            let marking = StepMarking::for_state(*state, &base_label, self.label_format);
            tracing::trace!(state = %state, label = %base_label, "applying step marking");
            self.host.apply(handle, &marking);
        }

        tracing::debug!(
            step = ?index.map(StepIndex::get),
            steps = states.len(),
            "step markings applied"
        );
        SyncOutcome::Applied(states)
    }
}
