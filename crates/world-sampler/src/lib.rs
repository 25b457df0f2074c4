//! World Sampler: a Bayes' theorem scatter of sampled worlds.
//!
//! Generates a population of worlds tagged with correlated H/E attributes,
//! places them on a canvas without overlap, and walks the reader through
//! four presentation steps with animated restyling.
//!
//! # Modules
//!
//! - [`config`]: TOML configuration with validation
//! - [`generate`]: Attribute sampling and rejection-sampled placement
//! - [`present`]: Per-step styles and the clamped step cursor
//! - [`transition`]: Eased interpolation between step styles
//! - [`tooltip`]: Hit testing, tooltip placement and fading
//! - [`widget`]: The mounted widget tying everything together
//! - [`svg`]: Standalone SVG output

pub mod config;
pub mod generate;
pub mod present;
pub mod svg;
pub mod tooltip;
pub mod transition;
pub mod widget;

// Re-export config types
pub use config::{
    default_config_toml, ConfigError, GenerationConfig, SamplerConfig, TooltipConfig,
    TransitionConfig,
};

// Re-export generation
pub use generate::{generate_worlds, min_pairwise_distance, PlacementBounds};

// Re-export presentation
pub use present::{style_for, styles_for, StepCursor};

// Re-export transition types
pub use transition::{ease_in_out, StyleTransition};

// Re-export tooltip types
pub use tooltip::{hit_test, place_tooltip, BoxSize, Fade, Tooltip};

// Re-export the widget
pub use widget::{PointerPosition, SamplerWidget};
