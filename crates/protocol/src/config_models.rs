//! Configuration models for `.step-indicator/config.toml`.
//!
//! This module defines the structure of the configuration file and the
//! presentational [`Theme`] it resolves to. Nothing in the theme affects
//! classification; it is consumed only by renderers.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

use crate::marking_models::LabelFormat;

/// Palette family used to pick theme defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Represents settings from `.step-indicator/config.toml`.
///
/// # Example
///
/// ```toml
/// # .step-indicator/config.toml
/// default_step = 1
/// label_format = "descriptive"
/// color_scheme = "dark"
///
/// [theme]
/// active_color = "cyan"
/// gap = 2
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct IndicatorConfig {
    /// Step used on first activation when the host never supplied one.
    #[serde(default = "default_step")]
    pub default_step: i64,

    /// How completed items are labelled for assistive technology.
    #[serde(default)]
    pub label_format: LabelFormat,

    /// Palette family for theme defaults.
    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// Per-field theme overrides.
    #[serde(default)]
    pub theme: ThemeOverrides,
}

fn default_step() -> i64 {
    1
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            default_step: default_step(),
            label_format: LabelFormat::default(),
            color_scheme: ColorScheme::default(),
            theme: ThemeOverrides::default(),
        }
    }
}

impl IndicatorConfig {
    /// Resolves the theme: scheme defaults with file overrides on top.
    pub fn theme(&self) -> Theme {
        Theme::for_scheme(self.color_scheme).with_overrides(&self.theme)
    }
}

/// Optional theme fields as written in the configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, TS)]
pub struct ThemeOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_block: Option<u16>,
}

/// Resolved presentational settings.
///
/// Colors are kept as names (`"white"`, `"darkgray"`, `"#3366ff"`); the
/// renderer decides how to interpret them. Sizes are in terminal cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Theme {
    /// Text and rule color of the active step.
    pub active_color: String,
    /// Text and rule color of completed steps.
    pub completed_color: String,
    /// Text and rule color of pending steps.
    pub default_color: String,
    /// Columns between adjacent steps.
    pub gap: u16,
    /// Rows of the rule drawn above each step.
    pub border_width: u16,
    /// Render the active label in bold.
    pub active_bold: bool,
    /// Blank rows between the rule and the label.
    pub padding_block: u16,
}

impl Theme {
    /// Default palette for a color scheme.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let (default_color, active_color, completed_color) = match scheme {
            ColorScheme::Light => ("black", "darkgray", "black"),
            ColorScheme::Dark => ("gray", "white", "gray"),
        };
        Self {
            active_color: active_color.to_string(),
            completed_color: completed_color.to_string(),
            default_color: default_color.to_string(),
            gap: 1,
            border_width: 1,
            active_bold: true,
            padding_block: 1,
        }
    }

    /// Applies every field present in `overrides`.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        if let Some(color) = &overrides.active_color {
            self.active_color.clone_from(color);
        }
        if let Some(color) = &overrides.completed_color {
            self.completed_color.clone_from(color);
        }
        if let Some(color) = &overrides.default_color {
            self.default_color.clone_from(color);
        }
        if let Some(gap) = overrides.gap {
            self.gap = gap;
        }
        if let Some(width) = overrides.border_width {
            self.border_width = width;
        }
        if let Some(bold) = overrides.active_bold {
            self.active_bold = bold;
        }
        if let Some(padding) = overrides.padding_block {
            self.padding_block = padding;
        }
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_scheme(ColorScheme::default())
    }
}
