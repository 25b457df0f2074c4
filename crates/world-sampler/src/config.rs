//! Configuration loading for the World Sampler.
//!
//! Every constant of the widget (population, conditional rates, spacing,
//! animation timing, tooltip geometry) lives in a TOML file so the scatter
//! can be tuned without recompiling.

use bayes_model::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Complete World Sampler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Seed for the placement RNG; drawn from entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Presentation mode of the host page
    pub theme: Theme,
    /// World generation settings
    pub generation: GenerationConfig,
    /// Step transition settings
    pub transition: TransitionConfig,
    /// Hover tooltip settings
    pub tooltip: TooltipConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            theme: Theme::Light,
            generation: GenerationConfig::default(),
            transition: TransitionConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl SamplerConfig {
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

    /// Rejects values the widget cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;

        if !(self.transition.duration_seconds >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "transition.duration_seconds must be >= 0, got {}",
                self.transition.duration_seconds
            )));
        }
        if !(self.tooltip.width > 0.0 && self.tooltip.height > 0.0) {
            return Err(ConfigError::Invalid(
                "tooltip.width and tooltip.height must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// World generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Target number of worlds (fewer survive if packing fails)
    pub population: usize,
    /// P(H)
    pub p_h: f64,
    /// P(E | H)
    pub p_e_given_h: f64,
    /// P(E | not H)
    pub p_e_given_not_h: f64,
    /// Minimum distance between world centers
    pub min_distance: f64,
    /// Placement attempts per world before it is dropped
    pub max_attempts: u32,
    /// Largest radius any step draws
    pub max_point_radius: f64,
    /// Extra space kept clear along every canvas edge
    pub edge_buffer: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            population: 1000,
            p_h: 0.3,
            p_e_given_h: 0.9,
            p_e_given_not_h: 0.1,
            min_distance: 8.0,
            max_attempts: 50,
            max_point_radius: 5.0,
            edge_buffer: 15.0,
        }
    }
}

impl GenerationConfig {
    /// Distance from each canvas edge that world centers keep.
    pub fn padding(&self) -> f64 {
        self.max_point_radius + self.edge_buffer
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("p_h", self.p_h),
            ("p_e_given_h", self.p_e_given_h),
            ("p_e_given_not_h", self.p_e_given_not_h),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "generation.{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if !(self.min_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "generation.min_distance must be > 0, got {}",
                self.min_distance
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "generation.max_attempts must be at least 1".into(),
            ));
        }
        if !(self.max_point_radius >= 0.0 && self.edge_buffer >= 0.0) {
            return Err(ConfigError::Invalid(
                "generation.max_point_radius and generation.edge_buffer must be >= 0".into(),
            ));
        }
        Ok(())
    }
}

/// Step transition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Duration of a step change animation
    pub duration_seconds: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 1.0,
        }
    }
}

/// Hover tooltip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Estimated tooltip box width
    pub width: f64,
    /// Estimated tooltip box height
    pub height: f64,
    /// Horizontal gap between pointer and box
    pub offset_x: f64,
    /// Vertical lift of the box above the pointer
    pub offset_y: f64,
    /// Gap used when the box flips to the other side
    pub flip_gap: f64,
    /// Opacity the tooltip fades in to
    pub opacity: f64,
    pub fade_in_seconds: f64,
    pub fade_out_seconds: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 90.0,
            height: 56.0,
            offset_x: 10.0,
            offset_y: 28.0,
            flip_gap: 10.0,
            opacity: 0.9,
            fade_in_seconds: 0.2,
            fade_out_seconds: 0.5,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Error serializing TOML config
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# World Sampler Configuration

# seed = 42
theme = "light"

[generation]
population = 1000
p_h = 0.3
p_e_given_h = 0.9
p_e_given_not_h = 0.1
min_distance = 8.0
max_attempts = 50
max_point_radius = 5.0
edge_buffer = 15.0

[transition]
duration_seconds = 1.0

[tooltip]
width = 90.0
height = 56.0
offset_x = 10.0
offset_y = 28.0
flip_gap = 10.0
opacity = 0.9
fade_in_seconds = 0.2
fade_out_seconds = 0.5
"#
    .to_string()
}
