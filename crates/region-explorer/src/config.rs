//! Configuration loading for the Region Explorer.
//!
//! Canvas geometry and label typography are read from TOML; anything
//! missing falls back to the defaults below.

use bayes_model::{Rgb, Theme};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Complete Region Explorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Presentation mode of the host page
    pub theme: Theme,
    /// Canvas size and framing
    pub canvas: CanvasConfig,
    /// "H" and "E" label typography
    pub labels: LabelConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            canvas: CanvasConfig::default(),
            labels: LabelConfig::default(),
        }
    }
}

impl ExplorerConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes this configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects values the diagram cannot be drawn with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = &self.canvas;
        if !(canvas.width > 0.0 && canvas.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                canvas.width, canvas.height
            )));
        }
        if !(canvas.margin >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas.margin must be >= 0, got {}",
                canvas.margin
            )));
        }
        if canvas.lens_segments < 2 {
            return Err(ConfigError::Invalid(
                "canvas.lens_segments must be at least 2".into(),
            ));
        }
        if !(self.labels.font_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "labels.font_size must be > 0, got {}",
                self.labels.font_size
            )));
        }
        Ok(())
    }
}

/// Canvas size and framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Outer width, margins included
    pub width: f64,
    /// Outer height, margins included
    pub height: f64,
    /// Space removed on every side before laying out the circles
    pub margin: f64,
    pub background: Rgb,
    pub border: Rgb,
    pub border_width: f64,
    /// Arc steps used when a host draws the lens as a polygon
    pub lens_segments: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin: 20.0,
            background: Rgb::new(0xf8, 0xf9, 0xfa),
            border: Rgb::new(0xde, 0xe2, 0xe6),
            border_width: 2.0,
            lens_segments: 48,
        }
    }
}

/// Label typography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub font_size: f64,
    pub font_family: String,
    pub italic: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 32.0,
            font_family: "Times, serif".to_string(),
            italic: true,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Returns the default configuration as a TOML string.
pub fn default_config_toml() -> String {
    r##"# Region Explorer configuration

# "light" or "dark"
theme = "light"

[canvas]
width = 600.0
height = 400.0
margin = 20.0
background = "#f8f9fa"
border = "#dee2e6"
border_width = 2.0
lens_segments = 48

[labels]
font_size = 32.0
font_family = "Times, serif"
italic = true
"##
    .to_string()
}
