//! Configuration models that aggregate all settings.

use si_protocol::IndicatorConfig;
use si_protocol::Theme;

/// Unified configuration loaded from the `.step-indicator/` directory.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Indicator behavior and theme
/// - `steps.yaml`: Initial step labels
///
/// # Example
///
/// ```rust,no_run
/// use si_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// println!("Loaded {} steps", config.steps.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Settings from `config.toml`.
    pub indicator: IndicatorConfig,

    /// Step labels from `steps.yaml`, in display order.
    pub steps: Vec<String>,
}

impl AppConfig {
    /// Theme resolved from the scheme defaults and overrides.
    pub fn theme(&self) -> Theme {
        self.indicator.theme()
    }
}
