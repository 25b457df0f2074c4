//! Placement of widget canvases inside the window.
//!
//! Widgets work in canvas pixels (origin top-left, y down). The window
//! cursor uses the same orientation, while the 2D camera sits at the
//! window center with y up.

use bayes_model::Rgb;
use bevy::prelude::*;

/// Side margin shared by both widgets.
const SIDE: f32 = 20.0;
/// Room for the sampler caption and step controls.
const SAMPLER_HEADER: f32 = 140.0;
/// Room for the sampler statistics row.
const SAMPLER_FOOTER: f32 = 90.0;
/// Room for the explorer formula.
const EXPLORER_HEADER: f32 = 170.0;

/// A canvas rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Scatter area below the step controls.
    pub fn sampler(window: Vec2) -> Self {
        Self::new(
            SIDE,
            SAMPLER_HEADER,
            window.x - 2.0 * SIDE,
            window.y - SAMPLER_HEADER - SAMPLER_FOOTER,
        )
    }

    /// Diagram area below the formula.
    pub fn explorer(window: Vec2) -> Self {
        Self::new(
            SIDE,
            EXPLORER_HEADER,
            window.x - 2.0 * SIDE,
            window.y - EXPLORER_HEADER - SIDE,
        )
    }

    /// A `width` x `height` rectangle centered in this one, shrunk to fit.
    pub fn centered(&self, width: f32, height: f32) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Self::new(
            self.left + (self.width - width) / 2.0,
            self.top + (self.height - height) / 2.0,
            width,
            height,
        )
    }

    /// Rectangle inset by `margin` on every side.
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(
            self.left + margin,
            self.top + margin,
            self.width - 2.0 * margin,
            self.height - 2.0 * margin,
        )
    }

    /// Cursor position in canvas pixels, if the cursor is over the canvas.
    pub fn local(&self, cursor: Vec2) -> Option<Vec2> {
        let local = cursor - Vec2::new(self.left, self.top);
        let inside = (0.0..=self.width).contains(&local.x) && (0.0..=self.height).contains(&local.y);
        inside.then_some(local)
    }

    /// World position of canvas pixel (x, y).
    pub fn to_world(&self, x: f64, y: f64, window: Vec2) -> Vec2 {
        screen_to_world(
            Vec2::new(self.left + x as f32, self.top + y as f32),
            window,
        )
    }

    /// World position of the canvas center.
    pub fn center_world(&self, window: Vec2) -> Vec2 {
        self.to_world(self.width as f64 / 2.0, self.height as f64 / 2.0, window)
    }
}

/// Converts window pixels to world coordinates for the fixed camera.
pub fn screen_to_world(screen: Vec2, window: Vec2) -> Vec2 {
    let offset = screen - window / 2.0;
    Vec2::new(offset.x, -offset.y)
}

/// Converts a widget color to a bevy color.
pub fn color(rgb: Rgb, alpha: f64) -> Color {
    let [r, g, b] = rgb.to_unit();
    Color::srgba(r, g, b, alpha.clamp(0.0, 1.0) as f32)
}
