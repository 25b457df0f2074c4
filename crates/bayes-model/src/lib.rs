//! Shared data types for the Bayes visualization widgets.
//!
//! This crate contains pure data structures with no widget logic.
//! It is a dependency for all other crates in the workspace.

pub mod color;
pub mod markup;
pub mod point;
pub mod region;
pub mod stats;
pub mod step;
pub mod style;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export color types
pub use color::{palette, ParseColorError, Rgb, Theme};

// Re-export point types
pub use point::SamplePoint;

// Re-export region types
pub use region::{ParseRegionError, Region};

// Re-export statistics types
pub use stats::{format_probability, WorldStats, MISSING_PROBABILITY};

// Re-export step types
pub use step::{ParseStepError, Step, STEP_COUNT};

// Re-export style types
pub use style::PointStyle;
