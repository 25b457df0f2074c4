//! Visualization layer: Bevy host for the Bayes widgets.

pub mod camera;
pub mod canvas;
pub mod debug;
pub mod explorer;
pub mod plugin;
pub mod sampler;

pub use plugin::{ActiveWidget, BayesVizPlugin, VizSettings};
