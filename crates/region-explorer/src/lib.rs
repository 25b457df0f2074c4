//! Region Explorer: an interactive two-set Venn diagram.
//!
//! Hovering or clicking parts of the formula P(H|E) = P(H∩E) / P(E)
//! highlights the matching region of the diagram. A click pins the
//! highlight until the same part, or the background, is clicked.
//!
//! # Modules
//!
//! - [`state`]: Hover and lock state machine
//! - [`controls`]: Formula fragments bound to regions
//! - [`layout`]: Circle geometry and the intersection lens
//! - [`styles`]: Per-region circle and overlay styling
//! - [`svg`]: Standalone SVG output
//! - [`widget`]: The mounted widget
//! - [`config`]: TOML configuration

pub mod config;
pub mod controls;
pub mod layout;
pub mod state;
pub mod styles;
pub mod svg;
pub mod widget;

// Re-export config types
pub use config::{default_config_toml, CanvasConfig, ConfigError, ExplorerConfig, LabelConfig};

// Re-export interaction types
pub use controls::FormulaControl;
pub use state::RegionExplorer;

// Re-export geometry and styling
pub use layout::{Point2, VennLayout, OVERLAP_RATIO};
pub use styles::{CircleStyle, OverlayStyle, RegionStyles};

pub use svg::render_venn;
pub use widget::ExplorerWidget;
