//! Venn diagram geometry.
//!
//! Two equal circles, H on the left and E on the right, centered in the
//! diagram area and overlapping by 0.8 of their radius. Coordinates are
//! diagram-local with y pointing down.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Fraction of the radius by which the circles overlap.
pub const OVERLAP_RATIO: f64 = 0.8;

/// A point in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Resolved circle positions for one diagram size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VennLayout {
    /// Drawing area width (canvas width minus both margins)
    pub width: f64,
    /// Drawing area height (canvas height minus both margins)
    pub height: f64,
    pub radius: f64,
    pub h_center: Point2,
    pub e_center: Point2,
}

impl VennLayout {
    /// Lays out the diagram for a `width` x `height` canvas.
    ///
    /// Sizes that leave no drawing area produce a zero-radius layout.
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        let margin = if margin.is_finite() { margin.max(0.0) } else { 0.0 };
        let width = width - 2.0 * margin;
        let height = height - 2.0 * margin;

        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            tracing::warn!(
                "Degenerate diagram area {}x{}, nothing will be drawn",
                width,
                height
            );
            return Self::default();
        }

        let cx = width / 2.0;
        let cy = height / 2.0;
        let radius = width.min(height) / 3.0;
        let overlap = radius * OVERLAP_RATIO;

        Self {
            width,
            height,
            radius,
            h_center: Point2::new(cx - overlap / 2.0, cy),
            e_center: Point2::new(cx + overlap / 2.0, cy),
        }
    }

    /// True when there is nothing to draw.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0)
    }

    /// Distance between the two centers.
    pub fn center_distance(&self) -> f64 {
        self.h_center.distance_to(self.e_center)
    }

    pub fn contains_h(&self, x: f64, y: f64) -> bool {
        !self.is_degenerate() && self.h_center.distance_to(Point2::new(x, y)) <= self.radius
    }

    pub fn contains_e(&self, x: f64, y: f64) -> bool {
        !self.is_degenerate() && self.e_center.distance_to(Point2::new(x, y)) <= self.radius
    }

    /// Whether (x, y) lies in H ∩ E.
    pub fn contains_intersection(&self, x: f64, y: f64) -> bool {
        self.contains_h(x, y) && self.contains_e(x, y)
    }

    /// Whether (x, y) lies inside the drawing area.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// Anchor of the "H" label, up and left of the H circle.
    pub fn h_label(&self) -> Point2 {
        Point2::new(
            self.h_center.x - self.radius * 0.9,
            self.h_center.y - self.radius * 0.9,
        )
    }

    /// Anchor of the "E" label, down and right of the E circle.
    pub fn e_label(&self) -> Point2 {
        Point2::new(self.e_center.x + self.radius, self.e_center.y + self.radius)
    }

    /// Polygon approximating the H ∩ E lens.
    ///
    /// Walks the arc of H that lies inside E, then the arc of E that lies
    /// inside H, with `segments` steps per arc (at least 2). Returns an empty
    /// outline when the circles do not overlap.
    pub fn lens_outline(&self, segments: usize) -> Vec<Point2> {
        let d = self.center_distance();
        if self.is_degenerate() || d >= 2.0 * self.radius {
            return Vec::new();
        }

        let segments = segments.max(2);
        let half_span = (d / (2.0 * self.radius)).clamp(-1.0, 1.0).acos();
        let arc_point = |center: Point2, angle: f64| {
            Point2::new(
                center.x + self.radius * angle.cos(),
                center.y + self.radius * angle.sin(),
            )
        };

        let mut outline = Vec::with_capacity(2 * segments);
        // Right-hand arc of H, both endpoints included
        for i in 0..=segments {
            let t = i as f64 / segments as f64;
            let angle = -half_span + 2.0 * half_span * t;
            outline.push(arc_point(self.h_center, angle));
        }
        // Left-hand arc of E, endpoints are shared with the H arc
        for i in 1..segments {
            let t = i as f64 / segments as f64;
            let angle = PI - half_span + 2.0 * half_span * t;
            outline.push(arc_point(self.e_center, angle));
        }
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_canvas_layout() {
        // 600x400 canvas with 20px margins
        let layout = VennLayout::new(600.0, 400.0, 20.0);
        assert_eq!(layout.width, 560.0);
        assert_eq!(layout.height, 360.0);
        assert!(approx(layout.radius, 120.0));
        assert!(approx(layout.h_center.x, 280.0 - 48.0));
        assert!(approx(layout.e_center.x, 280.0 + 48.0));
        assert!(approx(layout.h_center.y, 180.0));
        assert!(approx(layout.center_distance(), 96.0));
    }

    #[test]
    fn test_label_positions() {
        let layout = VennLayout::new(600.0, 400.0, 20.0);
        let h = layout.h_label();
        assert!(approx(h.x, 232.0 - 108.0));
        assert!(approx(h.y, 180.0 - 108.0));
        let e = layout.e_label();
        assert!(approx(e.x, 328.0 + 120.0));
        assert!(approx(e.y, 300.0));
    }

    #[test]
    fn test_degenerate_sizes() {
        for (w, h) in [(40.0, 400.0), (0.0, 0.0), (-5.0, 100.0), (f64::NAN, 100.0)] {
            let layout = VennLayout::new(w, h, 20.0);
            assert!(layout.is_degenerate());
            assert!(layout.lens_outline(16).is_empty());
            assert!(!layout.contains_intersection(0.0, 0.0));
        }
    }

    #[test]
    fn test_membership() {
        let layout = VennLayout::new(600.0, 400.0, 20.0);
        let mid = Point2::new(280.0, 180.0);
        assert!(layout.contains_intersection(mid.x, mid.y));

        // Far left of H is not in E
        assert!(layout.contains_h(232.0 - 110.0, 180.0));
        assert!(!layout.contains_e(232.0 - 110.0, 180.0));
        assert!(!layout.contains_intersection(232.0 - 110.0, 180.0));
    }

    #[test]
    fn test_lens_outline_lies_in_both_circles() {
        let layout = VennLayout::new(600.0, 400.0, 20.0);
        let outline = layout.lens_outline(24);
        assert_eq!(outline.len(), 48);

        for p in &outline {
            assert!(layout.h_center.distance_to(*p) <= layout.radius + 1e-6);
            assert!(layout.e_center.distance_to(*p) <= layout.radius + 1e-6);
        }

        // Tips of the lens sit on the vertical through the midpoint
        let mid_x = (layout.h_center.x + layout.e_center.x) / 2.0;
        assert!(approx(outline[0].x, mid_x));
        assert!(approx(outline[24].x, mid_x));
    }

    #[test]
    fn test_lens_outline_minimum_segments() {
        let layout = VennLayout::new(300.0, 300.0, 0.0);
        assert_eq!(layout.lens_outline(0).len(), 4);
    }
}
