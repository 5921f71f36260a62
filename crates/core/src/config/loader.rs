//! Configuration file loader for the `.step-indicator/` directory.
//!
//! This module loads and parses:
//! - `config.toml`: Indicator behavior and theme
//! - `steps.yaml`: A YAML list of initial step labels

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use si_protocol::IndicatorConfig;
use std::path::Path;

/// Name of the configuration directory under the root.
pub const CONFIG_DIR: &str = ".step-indicator";

/// Loads all configuration from the `.step-indicator/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.step-indicator/` folder
///
/// # Returns
///
/// An `AppConfig` containing all loaded configuration. Missing directories
/// or files yield the defaults rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid TOML or YAML syntax
/// - `default_step` is below 1
pub fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let config_dir = root.join(CONFIG_DIR);

    if !config_dir.exists() {
        tracing::debug!(path = %config_dir.display(), "no config directory, using defaults");
        return Ok(AppConfig::default());
    }

    let indicator = load_indicator_config(&config_dir)?;
    let steps = load_steps(&config_dir)?;

    tracing::debug!(
        path = %config_dir.display(),
        steps = steps.len(),
        "configuration loaded"
    );

    Ok(AppConfig { indicator, steps })
}

/// Loads indicator settings from `config.toml`.
fn load_indicator_config(config_dir: &Path) -> ConfigResult<IndicatorConfig> {
    let config_path = config_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(IndicatorConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: IndicatorConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    if config.default_step < 1 {
        return Err(ConfigError::InvalidConfig {
            path: config_path,
            reason: format!("default_step must be at least 1, got {}", config.default_step),
        });
    }

    Ok(config)
}

/// Loads step labels from `steps.yaml`.
fn load_steps(config_dir: &Path) -> ConfigResult<Vec<String>> {
    let steps_path = config_dir.join("steps.yaml");

    if !steps_path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&steps_path).map_err(|source| ConfigError::FileRead {
        path: steps_path.clone(),
        source,
    })?;

    // An empty file deserializes to null rather than a list.
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
        path: steps_path,
        source,
    })
}
