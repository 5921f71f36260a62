//! One-shot rendering of an indicator to stdout.

use colored::Colorize;
use color_eyre::Result;
use serde::Serialize;
use si_core::config::models::AppConfig;
use si_core::host::MemoryHost;
use si_core::StepIndicator;
use si_core::SyncOutcome;
use si_protocol::RawStepIndex;
use si_protocol::StepMarking;
use si_protocol::StepState;

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One step as printed in JSON output.
#[derive(Debug, Serialize)]
struct RenderedStep<'a> {
    position: usize,
    label: &'a str,
    #[serde(flatten)]
    marking: &'a StepMarking,
}

/// Attach an indicator to `labels`, print the markings it applies, and
/// detach again.
pub fn render(
    config: &AppConfig,
    labels: Vec<String>,
    step: RawStepIndex,
    format: OutputFormat,
) -> Result<String> {
    if let RawStepIndex::Invalid(raw) = &step {
        tracing::warn!(raw = %raw, "step is not a number, using the default step");
    }

    let mut indicator =
        StepIndicator::with_config(MemoryHost::with_labels(labels), &config.indicator)
            .initial_index(step);
    let outcome = indicator.activate();
    tracing::debug!(?outcome, "rendered");
    let host = indicator.into_host();

    match format {
        OutputFormat::Json => {
            let steps: Vec<RenderedStep<'_>> = host
                .steps()
                .iter()
                .enumerate()
                .map(|(index, step)| RenderedStep {
                    position: index + 1,
                    label: step.label.as_str(),
                    marking: &step.marking,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&steps)?)
        }
        OutputFormat::Text => Ok(render_text(&host, &outcome)),
    }
}

fn render_text(host: &MemoryHost, outcome: &SyncOutcome) -> String {
    if host.is_empty() {
        return "No steps.".to_string();
    }

    let width = host
        .steps()
        .iter()
        .map(|step| step.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = host
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let marking = &step.marking;
            let state = format!("{:<9}", marking.state.as_str());
            let state = match marking.state {
                StepState::Active => state.yellow().bold(),
                StepState::Completed => state.green(),
                StepState::Pending => state.dimmed(),
            };

            let mut line = format!("{:>2}. {:<width$}  {state}", index + 1, step.label);
            if marking.aria_current {
                line.push_str("  aria-current=\"true\"");
            }
            if let Some(label) = &marking.aria_label {
                line.push_str(&format!("  aria-label={label:?}"));
            }
            line.trim_end().to_string()
        })
        .collect();

    if let SyncOutcome::Applied(states) = outcome {
        let completed = states
            .iter()
            .filter(|state| **state == StepState::Completed)
            .count();
        lines.push(format!("{completed} of {} completed", states.len()));
    }
    lines.join("\n")
}
