//! Animated step transitions.
//!
//! A step change never snaps: every world interpolates radius, opacity and
//! fill from what is on screen toward the target step's style.

use bayes_model::PointStyle;

/// Smooth ease-in-out function for transitions.
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Interpolation between two style sets of the same point set.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTransition {
    /// Styles on screen when the transition started.
    from: Vec<PointStyle>,
    /// Styles of the target step.
    to: Vec<PointStyle>,
    /// Total duration in seconds.
    duration: f64,
    /// Time elapsed so far.
    elapsed: f64,
}

impl StyleTransition {
    /// Begins a transition from `from` to `to` over `duration` seconds.
    pub fn new(from: Vec<PointStyle>, to: Vec<PointStyle>, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// A finished transition resting on `styles`.
    pub fn settled(styles: Vec<PointStyle>) -> Self {
        Self {
            from: styles.clone(),
            to: styles,
            duration: 0.0,
            elapsed: 0.0,
        }
    }

    /// Progress of this transition (0.0 to 1.0).
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advances the clock by `delta` seconds.
    pub fn advance(&mut self, delta: f64) {
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta;
        }
    }

    /// Styles at the current progress.
    ///
    /// A world with no starting style (the point set grew) starts at its target.
    pub fn sample(&self) -> Vec<PointStyle> {
        if self.is_complete() {
            return self.to.clone();
        }

        let t = ease_in_out(self.progress());
        self.to
            .iter()
            .enumerate()
            .map(|(i, target)| {
                let start = self.from.get(i).unwrap_or(target);
                start.lerp(target, t)
            })
            .collect()
    }

    /// Styles the transition ends on.
    pub fn target(&self) -> &[PointStyle] {
        &self.to
    }

    pub fn len(&self) -> usize {
        self.to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to.is_empty()
    }
}

impl Default for StyleTransition {
    fn default() -> Self {
        Self::settled(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bayes_model::palette;

    fn styles(radius: f64, opacity: f64) -> Vec<PointStyle> {
        vec![PointStyle::new(radius, opacity, palette::NEUTRAL); 3]
    }

    #[test]
    fn test_ease_in_out() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        let mid = ease_in_out(0.5);
        assert!((mid - 0.5).abs() < 0.01);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_transition_starts_at_from_and_ends_at_to() {
        let mut transition = StyleTransition::new(styles(2.0, 0.1), styles(5.0, 1.0), 1.0);

        assert_eq!(transition.sample(), styles(2.0, 0.1));
        assert!(!transition.is_complete());

        transition.advance(0.5);
        assert_eq!(transition.progress(), 0.5);
        let mid = transition.sample();
        assert!(mid[0].radius > 2.0 && mid[0].radius < 5.0);

        transition.advance(0.6);
        assert!(transition.is_complete());
        assert_eq!(transition.sample(), styles(5.0, 1.0));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let transition = StyleTransition::new(styles(1.0, 0.05), styles(3.0, 1.0), 0.0);
        assert!(transition.is_complete());
        assert_eq!(transition.sample(), styles(3.0, 1.0));
    }

    #[test]
    fn test_advance_ignores_bad_deltas() {
        let mut transition = StyleTransition::new(styles(1.0, 1.0), styles(2.0, 1.0), 1.0);
        transition.advance(-1.0);
        transition.advance(f64::NAN);
        assert_eq!(transition.progress(), 0.0);
    }

    #[test]
    fn test_settled_is_complete() {
        let transition = StyleTransition::settled(styles(3.0, 1.0));
        assert!(transition.is_complete());
        assert_eq!(transition.target(), styles(3.0, 1.0).as_slice());
        assert_eq!(transition.len(), 3);
    }
}
