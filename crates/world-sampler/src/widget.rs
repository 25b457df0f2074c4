//! The World Sampler widget state holder.
//!
//! Hosts feed it canvas sizes, step navigation, pointer events and frame
//! time; it keeps the point set, the animated styles and the hover state
//! consistent. Dependencies are tracked explicitly: the point set only
//! changes when the canvas size changes, and styles only animate when the
//! step changes.

use bayes_model::{PointStyle, Rgb, SamplePoint, Step, Theme, WorldStats};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SamplerConfig;
use crate::generate::generate_worlds;
use crate::present::{styles_for, StepCursor};
use crate::tooltip::{hit_test, BoxSize, Tooltip};
use crate::transition::StyleTransition;

/// A pointer position in both canvas and viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    /// Position inside the canvas, used for hit testing.
    pub canvas_x: f64,
    pub canvas_y: f64,
    /// Position inside the viewport, used for tooltip placement.
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerPosition {
    /// Pointer where canvas and viewport coincide.
    pub fn same(x: f64, y: f64) -> Self {
        Self {
            canvas_x: x,
            canvas_y: y,
            page_x: x,
            page_y: y,
        }
    }
}

/// Mounted World Sampler.
#[derive(Debug)]
pub struct SamplerWidget<R: Rng = SmallRng> {
    config: SamplerConfig,
    rng: R,
    /// Canvas size of the current generation
    size: Option<(f64, f64)>,
    /// Viewport that the tooltip must stay inside
    viewport: BoxSize,
    points: Vec<SamplePoint>,
    stats: WorldStats,
    cursor: StepCursor,
    transition: StyleTransition,
    hovered: Option<usize>,
    /// Created on first hover, released on teardown
    tooltip: Option<Tooltip>,
    generation: u64,
}

impl SamplerWidget<SmallRng> {
    /// Creates a widget seeded from the config, or from entropy without a seed.
    pub fn from_config(config: SamplerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let seed: u64 = rand::random();
                tracing::info!("No seed configured, using {}", seed);
                SmallRng::seed_from_u64(seed)
            }
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> SamplerWidget<R> {
    /// Creates an unmounted widget; nothing is generated until [`resize`](Self::resize).
    pub fn new(config: SamplerConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            size: None,
            viewport: BoxSize::new(f64::INFINITY, f64::INFINITY),
            points: Vec::new(),
            stats: WorldStats::default(),
            cursor: StepCursor::default(),
            transition: StyleTransition::default(),
            hovered: None,
            tooltip: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Sets the canvas size, regenerating every world if it changed.
    ///
    /// Returns true when a new point set was generated. The previous set is
    /// discarded entirely and hover state is cleared.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.size == Some((width, height)) {
            return false;
        }

        self.size = Some((width, height));
        self.points = generate_worlds(width, height, &self.config.generation, &mut self.rng);
        self.stats = WorldStats::from_points(&self.points);
        self.transition = StyleTransition::settled(styles_for(&self.points, self.cursor.step()));
        self.generation += 1;
        self.clear_hover();

        tracing::info!(
            "Generated {} worlds for {}x{} canvas (generation {})",
            self.points.len(),
            width,
            height,
            self.generation
        );
        true
    }

    /// Sets the viewport the tooltip is clamped to.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = BoxSize::new(width, height);
    }

    pub fn size(&self) -> Option<(f64, f64)> {
        self.size
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Statistics over the full current point set.
    pub fn stats(&self) -> &WorldStats {
        &self.stats
    }

    /// Number of point sets generated since mount.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&self) -> Step {
        self.cursor.step()
    }

    pub fn can_prev(&self) -> bool {
        self.cursor.can_prev()
    }

    pub fn can_next(&self) -> bool {
        self.cursor.can_next()
    }

    /// Advances one step; no-op at the last step.
    pub fn next_step(&mut self) -> bool {
        let moved = self.cursor.next();
        if moved {
            self.begin_transition();
        }
        moved
    }

    /// Goes back one step; no-op at the first step.
    pub fn prev_step(&mut self) -> bool {
        let moved = self.cursor.prev();
        if moved {
            self.begin_transition();
        }
        moved
    }

    /// Jumps to a step index, clamped to [0, 3].
    pub fn go_to_step(&mut self, index: usize) -> bool {
        let moved = self.cursor.go_to_index(index);
        if moved {
            self.begin_transition();
        }
        moved
    }

    fn begin_transition(&mut self) {
        let from = self.transition.sample();
        let to = styles_for(&self.points, self.cursor.step());
        self.transition = StyleTransition::new(from, to, self.config.transition.duration_seconds);
        tracing::debug!("Transitioning to {} ({})", self.cursor.step(), self.cursor.step().label());
    }

    /// Advances animations by `delta` seconds of frame time.
    ///
    /// A tooltip whose fade-out has finished is released; the next hover
    /// creates a fresh one.
    pub fn advance(&mut self, delta: f64) {
        self.transition.advance(delta);
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.advance(delta);
            if tooltip.is_faded_out() {
                self.tooltip = None;
                tracing::trace!("Tooltip faded out");
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.transition.is_complete()
    }

    /// Styles currently on screen (mid-transition values while animating).
    pub fn current_styles(&self) -> Vec<PointStyle> {
        self.transition.sample()
    }

    /// Styles the active step settles on.
    pub fn target_styles(&self) -> &[PointStyle] {
        self.transition.target()
    }

    /// Updates hover from a pointer move.
    ///
    /// Entering a world outlines it and shows the tooltip; moving off every
    /// world behaves like a pointer-leave.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) {
        let styles = self.transition.sample();
        match hit_test(&self.points, &styles, pointer.canvas_x, pointer.canvas_y) {
            Some(index) => {
                if self.hovered != Some(index) {
                    tracing::trace!("Hovering world {}", self.points[index].id);
                }
                self.hovered = Some(index);
                let point = self.points[index];
                let viewport = self.viewport;
                let config = &self.config.tooltip;
                self.tooltip
                    .get_or_insert_with(Tooltip::hidden)
                    .show(&point, pointer.page_x, pointer.page_y, viewport, config);
            }
            None => self.pointer_left(),
        }
    }

    /// Clears the outline and fades the tooltip out.
    pub fn pointer_left(&mut self) {
        self.hovered = None;
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.hide(&self.config.tooltip);
        }
    }

    fn clear_hover(&mut self) {
        self.hovered = None;
        if let Some(tooltip) = self.tooltip.as_mut() {
            *tooltip = Tooltip::hidden();
        }
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_point(&self) -> Option<&SamplePoint> {
        self.hovered.and_then(|i| self.points.get(i))
    }

    /// Index and color of the outline on the hovered world.
    pub fn hover_outline(&self) -> Option<(usize, Rgb)> {
        self.hovered
            .map(|index| (index, self.config.theme.hover_outline()))
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// Reports the tooltip size as rendered by the host.
    ///
    /// Placement falls back to the configured estimate until this is called.
    /// Returns true if the tooltip moved to a new size.
    pub fn set_tooltip_size(&mut self, width: f64, height: f64) -> bool {
        let viewport = self.viewport;
        let config = &self.config.tooltip;
        self.tooltip
            .as_mut()
            .is_some_and(|tooltip| tooltip.set_measured_size(BoxSize::new(width, height), viewport, config))
    }

    /// The tooltip, once a hover has created it.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Releases the tooltip and clears hover. Must run on unmount.
    ///
    /// Returns true if a tooltip was released; repeated calls are harmless.
    pub fn teardown(&mut self) -> bool {
        self.hovered = None;
        let released = self.tooltip.take().is_some();
        if released {
            tracing::debug!("Released sampler tooltip");
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;

    fn widget(population: usize) -> SamplerWidget {
        let config = SamplerConfig {
            seed: Some(42),
            generation: GenerationConfig {
                population,
                ..GenerationConfig::default()
            },
            ..SamplerConfig::default()
        };
        SamplerWidget::from_config(config)
    }

    #[test]
    fn test_nothing_generated_before_resize() {
        let widget = widget(100);
        assert!(widget.points().is_empty());
        assert!(widget.size().is_none());
        assert_eq!(widget.generation(), 0);
    }

    #[test]
    fn test_resize_regenerates_only_on_change() {
        let mut widget = widget(100);

        assert!(widget.resize(400.0, 300.0));
        let first = widget.points().to_vec();
        assert_eq!(widget.generation(), 1);

        assert!(!widget.resize(400.0, 300.0));
        assert_eq!(widget.points(), first.as_slice());
        assert_eq!(widget.generation(), 1);

        assert!(widget.resize(500.0, 300.0));
        assert_eq!(widget.generation(), 2);
        assert!(widget.points().iter().all(|p| p.x <= 480.0));
    }

    #[test]
    fn test_invalid_size_renders_empty() {
        let mut widget = widget(100);
        widget.resize(0.0, 0.0);
        assert!(widget.points().is_empty());
        assert!(widget.current_styles().is_empty());
        assert_eq!(widget.stats().total, 0);
        assert!(widget.stats().p_h.is_none());
    }

    #[test]
    fn test_step_navigation_animates() {
        let mut widget = widget(50);
        widget.resize(300.0, 300.0);
        assert!(!widget.is_animating());

        assert!(!widget.prev_step());
        assert!(widget.next_step());
        assert_eq!(widget.step(), Step::FocusH);
        assert!(widget.is_animating());

        widget.advance(0.5);
        assert!(widget.is_animating());
        widget.advance(0.6);
        assert!(!widget.is_animating());
        assert_eq!(widget.current_styles(), widget.target_styles());
    }

    #[test]
    fn test_next_at_last_step_is_noop() {
        let mut widget = widget(10);
        widget.resize(300.0, 300.0);
        assert!(widget.go_to_step(3));
        widget.advance(2.0);
        assert!(!widget.next_step());
        assert!(!widget.is_animating());
        assert!(!widget.can_next());
        assert!(widget.can_prev());
    }

    #[test]
    fn test_stats_ignore_step() {
        let mut widget = widget(200);
        widget.resize(400.0, 400.0);
        let before = *widget.stats();
        widget.next_step();
        widget.next_step();
        assert_eq!(*widget.stats(), before);
    }

    #[test]
    fn test_hover_creates_tooltip_and_leave_hides_it() {
        let mut widget = widget(30);
        widget.resize(400.0, 400.0);
        widget.set_viewport(1024.0, 768.0);
        assert!(widget.tooltip().is_none());

        let target = widget.points()[0];
        widget.pointer_moved(PointerPosition::same(target.x, target.y));

        assert_eq!(widget.hovered_point().map(|p| p.id), Some(target.id));
        let (_, outline) = widget.hover_outline().unwrap();
        assert_eq!(outline, Theme::Light.hover_outline());
        let tooltip = widget.tooltip().unwrap();
        assert!(tooltip.is_shown());
        assert_eq!(tooltip.lines[0], format!("World {}", target.id));

        widget.pointer_left();
        assert!(widget.hovered_point().is_none());
        assert!(widget.hover_outline().is_none());
        assert!(!widget.tooltip().unwrap().is_shown());
    }

    #[test]
    fn test_moving_off_worlds_acts_as_leave() {
        let mut widget = widget(5);
        widget.resize(400.0, 400.0);
        let target = widget.points()[0];
        widget.pointer_moved(PointerPosition::same(target.x, target.y));
        assert!(widget.hovered_index().is_some());

        // Canvas corner lies inside the padding, never on a world
        widget.pointer_moved(PointerPosition::same(1.0, 1.0));
        assert!(widget.hovered_index().is_none());
    }

    #[test]
    fn test_teardown_releases_tooltip() {
        let mut widget = widget(5);
        widget.resize(400.0, 400.0);
        let target = widget.points()[0];
        widget.pointer_moved(PointerPosition::same(target.x, target.y));

        assert!(widget.teardown());
        assert!(widget.tooltip().is_none());
        assert!(widget.hovered_index().is_none());
        assert!(!widget.teardown(), "second teardown has nothing to release");
    }

    #[test]
    fn test_resize_clears_hover() {
        let mut widget = widget(5);
        widget.resize(400.0, 400.0);
        let target = widget.points()[0];
        widget.pointer_moved(PointerPosition::same(target.x, target.y));

        widget.resize(420.0, 400.0);
        assert!(widget.hovered_index().is_none());
        assert!(!widget.tooltip().unwrap().is_shown());
    }

    #[test]
    fn test_tooltip_released_after_fade_out() {
        let mut widget = widget(30);
        widget.resize(400.0, 400.0);
        widget.set_viewport(1024.0, 768.0);
        let target = widget.points()[0];

        widget.pointer_moved(PointerPosition::same(target.x, target.y));
        widget.advance(0.2);
        assert_eq!(widget.tooltip().unwrap().opacity(), 0.9);

        widget.pointer_left();
        widget.advance(0.25);
        let fading = widget.tooltip().expect("still fading out");
        assert!((fading.opacity() - 0.45).abs() < 1e-9);

        widget.advance(0.3);
        assert!(widget.tooltip().is_none());
        assert!(!widget.teardown(), "nothing left to release");

        // The next hover creates a new tooltip
        widget.pointer_moved(PointerPosition::same(target.x, target.y));
        assert!(widget.tooltip().unwrap().is_shown());
    }

    #[test]
    fn test_measured_tooltip_size_stays_in_viewport() {
        let mut widget = widget(30);
        widget.resize(400.0, 400.0);
        widget.set_viewport(420.0, 420.0);
        assert!(!widget.set_tooltip_size(120.0, 80.0), "no tooltip yet");

        let target = widget.points()[0];
        widget.pointer_moved(PointerPosition::same(target.x, target.y));
        assert!(widget.set_tooltip_size(160.0, 90.0));

        let tooltip = widget.tooltip().unwrap();
        assert!(tooltip.left >= 0.0 && tooltip.left + 160.0 <= 420.0);
        assert!(tooltip.top >= 0.0 && tooltip.top + 90.0 <= 420.0);
    }
}
