//! Rendered style of a single world.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Radius, opacity and fill of a rendered world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub radius: f64,
    pub opacity: f64,
    pub fill: Rgb,
}

impl PointStyle {
    pub const fn new(radius: f64, opacity: f64, fill: Rgb) -> Self {
        Self {
            radius,
            opacity,
            fill,
        }
    }

    /// Interpolates every property toward `target`; `t` is clamped to [0, 1].
    pub fn lerp(&self, target: &PointStyle, t: f64) -> PointStyle {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        PointStyle {
            radius: self.radius + (target.radius - self.radius) * t,
            opacity: self.opacity + (target.opacity - self.opacity) * t,
            fill: self.fill.lerp(target.fill, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    #[test]
    fn test_style_lerp() {
        let from = PointStyle::new(2.0, 0.1, palette::BLACK);
        let to = PointStyle::new(4.0, 1.0, palette::WHITE);

        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);

        let mid = from.lerp(&to, 0.5);
        assert!((mid.radius - 3.0).abs() < 1e-9);
        assert!((mid.opacity - 0.55).abs() < 1e-9);
    }
}
