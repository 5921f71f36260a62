//! Test fixtures for step lists and configuration directories.

use si_core::StepIndicator;
use tempfile::TempDir;

use super::RecordingHost;

/// Three-step checkout flow used by most scenarios.
pub const CHECKOUT: [&str; 3] = ["Cart", "Shipping", "Payment"];

/// An active indicator over the checkout steps.
#[allow(dead_code)]
pub fn active_checkout() -> StepIndicator<RecordingHost> {
    let mut indicator = StepIndicator::new(RecordingHost::with_labels(&CHECKOUT));
    indicator.activate();
    indicator
}

/// Create a temporary root with a `.step-indicator/` directory.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_config_root(config_toml: Option<&str>, steps_yaml: Option<&str>) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let config_dir = temp_dir.path().join(".step-indicator");
    std::fs::create_dir_all(&config_dir)?;

    if let Some(content) = config_toml {
        std::fs::write(config_dir.join("config.toml"), content)?;
    }
    if let Some(content) = steps_yaml {
        std::fs::write(config_dir.join("steps.yaml"), content)?;
    }

    Ok(temp_dir)
}
