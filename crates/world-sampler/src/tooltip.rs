//! Hover affordance: hit testing, tooltip placement and fading.

use bayes_model::{PointStyle, SamplePoint};

use crate::config::TooltipConfig;

/// Index of the topmost world whose rendered circle contains (x, y).
///
/// Later worlds are drawn on top, so the search runs back to front.
pub fn hit_test(points: &[SamplePoint], styles: &[PointStyle], x: f64, y: f64) -> Option<usize> {
    points
        .iter()
        .zip(styles)
        .enumerate()
        .rev()
        .find(|(_, (point, style))| point.distance_to_xy(x, y) <= style.radius)
        .map(|(index, _)| index)
}

/// Size of a box in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of the tooltip for a pointer at (`pointer_x`, `pointer_y`).
///
/// The box starts to the right of and above the pointer. It flips left if
/// it would overflow the right edge, drops below the pointer if it would
/// leave the top, and flips up if it would overflow the bottom. A final
/// clamp keeps it inside viewports that are barely larger than the box.
pub fn place_tooltip(
    pointer_x: f64,
    pointer_y: f64,
    size: BoxSize,
    viewport: BoxSize,
    config: &TooltipConfig,
) -> (f64, f64) {
    let mut left = pointer_x + config.offset_x;
    let mut top = pointer_y - config.offset_y;

    if left + size.width > viewport.width {
        left = pointer_x - size.width - config.flip_gap;
    }
    if top < 0.0 {
        top = pointer_y + config.flip_gap;
    }
    if top + size.height > viewport.height {
        top = pointer_y - size.height - config.flip_gap;
    }

    (
        clamp_span(left, size.width, viewport.width),
        clamp_span(top, size.height, viewport.height),
    )
}

fn clamp_span(start: f64, length: f64, limit: f64) -> f64 {
    let max_start = (limit - length).max(0.0);
    start.clamp(0.0, max_start)
}

/// Opacity ramp toward a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
}

impl Fade {
    /// A fade resting at `opacity`.
    pub fn at(opacity: f64) -> Self {
        Self {
            from: opacity,
            to: opacity,
            duration: 0.0,
            elapsed: 0.0,
        }
    }

    /// Starts ramping from the current opacity to `target`.
    pub fn retarget(&mut self, target: f64, duration: f64) {
        if (self.to - target).abs() < f64::EPSILON {
            return;
        }
        *self = Self {
            from: self.opacity(),
            to: target,
            duration,
            elapsed: 0.0,
        };
    }

    pub fn advance(&mut self, delta: f64) {
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta;
        }
    }

    pub fn opacity(&self) -> f64 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}

/// Floating label describing the hovered world.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Text lines, e.g. "World 12", "H: Yes", "E: No".
    pub lines: [String; 3],
    /// Top-left corner in viewport pixels.
    pub left: f64,
    pub top: f64,
    /// Pointer position the box was last placed against
    anchor: (f64, f64),
    /// Rendered size reported by the host, if any
    measured: Option<BoxSize>,
    fade: Fade,
}

impl Tooltip {
    /// A hidden, empty tooltip.
    pub fn hidden() -> Self {
        Self {
            lines: Default::default(),
            left: 0.0,
            top: 0.0,
            anchor: (0.0, 0.0),
            measured: None,
            fade: Fade::at(0.0),
        }
    }

    /// Box size used for placement: the measured size once known, else the
    /// configured estimate.
    pub fn size(&self, config: &TooltipConfig) -> BoxSize {
        self.measured
            .unwrap_or_else(|| BoxSize::new(config.width, config.height))
    }

    /// Shows the tooltip for `point` with the pointer at viewport (`x`, `y`).
    pub fn show(&mut self, point: &SamplePoint, x: f64, y: f64, viewport: BoxSize, config: &TooltipConfig) {
        self.lines = point.describe();
        self.anchor = (x, y);
        self.place(viewport, config);
        self.fade.retarget(config.opacity, config.fade_in_seconds);
    }

    /// Records the rendered box size and re-places the box against the last
    /// pointer position. Non-positive sizes are ignored.
    ///
    /// Returns true if the size changed.
    pub fn set_measured_size(&mut self, size: BoxSize, viewport: BoxSize, config: &TooltipConfig) -> bool {
        let valid = size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0;
        if !valid || self.measured == Some(size) {
            return false;
        }
        self.measured = Some(size);
        self.place(viewport, config);
        true
    }

    fn place(&mut self, viewport: BoxSize, config: &TooltipConfig) {
        let (x, y) = self.anchor;
        let (left, top) = place_tooltip(x, y, self.size(config), viewport, config);
        self.left = left;
        self.top = top;
    }

    /// Starts fading out.
    pub fn hide(&mut self, config: &TooltipConfig) {
        self.fade.retarget(0.0, config.fade_out_seconds);
    }

    pub fn advance(&mut self, delta: f64) {
        self.fade.advance(delta);
    }

    pub fn opacity(&self) -> f64 {
        self.fade.opacity()
    }

    /// True while the tooltip is shown or still fading in.
    pub fn is_shown(&self) -> bool {
        self.fade.target() > 0.0
    }

    /// True once a fade-out has fully completed.
    pub fn is_faded_out(&self) -> bool {
        !self.is_shown() && self.opacity() <= 0.0
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bayes_model::palette;

    fn config() -> TooltipConfig {
        TooltipConfig::default()
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let points = vec![
            SamplePoint::new(0, 10.0, 10.0, false, false),
            SamplePoint::new(1, 12.0, 10.0, true, false),
        ];
        let styles = vec![PointStyle::new(3.0, 1.0, palette::NEUTRAL); 2];

        assert_eq!(hit_test(&points, &styles, 11.0, 10.0), Some(1));
        assert_eq!(hit_test(&points, &styles, 8.0, 10.0), Some(0));
        assert_eq!(hit_test(&points, &styles, 50.0, 50.0), None);
    }

    #[test]
    fn test_hit_test_uses_rendered_radius() {
        let points = vec![SamplePoint::new(0, 10.0, 10.0, false, false)];
        let small = vec![PointStyle::new(1.0, 0.05, palette::NEUTRAL)];
        let large = vec![PointStyle::new(5.0, 1.0, palette::NEUTRAL)];

        assert_eq!(hit_test(&points, &small, 14.0, 10.0), None);
        assert_eq!(hit_test(&points, &large, 14.0, 10.0), Some(0));
    }

    #[test]
    fn test_place_tooltip_default_position() {
        let (left, top) = place_tooltip(
            100.0,
            100.0,
            BoxSize::new(90.0, 56.0),
            BoxSize::new(1024.0, 768.0),
            &config(),
        );
        assert_eq!((left, top), (110.0, 72.0));
    }

    #[test]
    fn test_place_tooltip_flips_left_at_right_edge() {
        let (left, _) = place_tooltip(
            1000.0,
            300.0,
            BoxSize::new(90.0, 56.0),
            BoxSize::new(1024.0, 768.0),
            &config(),
        );
        assert_eq!(left, 1000.0 - 90.0 - 10.0);
    }

    #[test]
    fn test_place_tooltip_moves_below_at_top_edge() {
        let (_, top) = place_tooltip(
            100.0,
            5.0,
            BoxSize::new(90.0, 56.0),
            BoxSize::new(1024.0, 768.0),
            &config(),
        );
        assert_eq!(top, 15.0);
    }

    #[test]
    fn test_place_tooltip_flips_up_at_bottom_edge() {
        let (_, top) = place_tooltip(
            100.0,
            760.0,
            BoxSize::new(90.0, 56.0),
            BoxSize::new(1024.0, 768.0),
            &config(),
        );
        assert_eq!(top, 760.0 - 56.0 - 10.0);
    }

    #[test]
    fn test_place_tooltip_stays_in_tiny_viewport() {
        let viewport = BoxSize::new(100.0, 60.0);
        let size = BoxSize::new(90.0, 56.0);
        for (x, y) in [(0.0, 0.0), (50.0, 30.0), (100.0, 60.0)] {
            let (left, top) = place_tooltip(x, y, size, viewport, &config());
            assert!(left >= 0.0 && left + size.width <= viewport.width);
            assert!(top >= 0.0 && top + size.height <= viewport.height);
        }
    }

    #[test]
    fn test_fade_ramps() {
        let mut fade = Fade::at(0.0);
        fade.retarget(0.9, 0.2);
        assert_eq!(fade.opacity(), 0.0);
        fade.advance(0.1);
        assert!((fade.opacity() - 0.45).abs() < 1e-9);
        fade.advance(0.2);
        assert_eq!(fade.opacity(), 0.9);
    }

    #[test]
    fn test_tooltip_show_and_hide() {
        let mut tooltip = Tooltip::hidden();
        assert!(!tooltip.is_shown());

        let point = SamplePoint::new(3, 0.0, 0.0, true, true);
        tooltip.show(&point, 100.0, 100.0, BoxSize::new(800.0, 600.0), &config());
        assert!(tooltip.is_shown());
        assert_eq!(tooltip.text(), "World 3\nH: Yes\nE: Yes");

        tooltip.advance(1.0);
        assert_eq!(tooltip.opacity(), 0.9);

        tooltip.hide(&config());
        assert!(!tooltip.is_shown());
        tooltip.advance(1.0);
        assert_eq!(tooltip.opacity(), 0.0);
    }

    #[test]
    fn test_measured_size_replaces_estimate() {
        let config = config();
        let viewport = BoxSize::new(1024.0, 768.0);
        let mut tooltip = Tooltip::hidden();
        let point = SamplePoint::new(1, 0.0, 0.0, false, true);

        // The estimate fits next to the pointer
        tooltip.show(&point, 900.0, 100.0, viewport, &config);
        assert_eq!(tooltip.left, 910.0);

        // The rendered box is wider, so it flips left of the pointer
        assert!(tooltip.set_measured_size(BoxSize::new(140.0, 70.0), viewport, &config));
        assert_eq!(tooltip.size(&config), BoxSize::new(140.0, 70.0));
        assert_eq!(tooltip.left, 900.0 - 140.0 - 10.0);

        // Later placements keep using the measured size
        tooltip.show(&point, 1000.0, 740.0, viewport, &config);
        assert!(tooltip.left + 140.0 <= viewport.width);
        assert!(tooltip.top + 70.0 <= viewport.height);

        assert!(!tooltip.set_measured_size(BoxSize::new(140.0, 70.0), viewport, &config));
        assert!(!tooltip.set_measured_size(BoxSize::new(0.0, 70.0), viewport, &config));
    }

    #[test]
    fn test_faded_out_after_full_fade() {
        let mut tooltip = Tooltip::hidden();
        assert!(tooltip.is_faded_out());

        let point = SamplePoint::new(2, 0.0, 0.0, true, false);
        tooltip.show(&point, 50.0, 50.0, BoxSize::new(800.0, 600.0), &config());
        assert!(!tooltip.is_faded_out());

        tooltip.advance(0.2);
        tooltip.hide(&config());
        tooltip.advance(0.25);
        assert!(!tooltip.is_faded_out());
        tooltip.advance(0.3);
        assert!(tooltip.is_faded_out());
    }
}
