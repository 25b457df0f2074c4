//! Step Presentation
//!
//! Maps each world to its rendered style for the active step, and tracks
//! which step the reader is on.

use bayes_model::{palette, PointStyle, SamplePoint, Step};

/// Rendered style of `point` at `step`.
///
/// - Step 0: every world at radius 3, colored by its (H, E) category.
/// - Step 1: H-worlds at radius 4 colored by E; the rest dimmed to 0.1.
/// - Step 2: H∩E-worlds at radius 5 in green; the rest dimmed to 0.2.
/// - Step 3: E-worlds at radius 5, green with H and red without; the rest
///   nearly invisible.
pub fn style_for(point: &SamplePoint, step: Step) -> PointStyle {
    match step {
        Step::AllWorlds => PointStyle::new(3.0, 1.0, point.category_color()),
        Step::FocusH => {
            if point.has_h {
                PointStyle::new(4.0, 1.0, point.category_color())
            } else {
                PointStyle::new(2.0, 0.1, palette::NEUTRAL)
            }
        }
        Step::Joint => {
            if point.has_both() {
                PointStyle::new(5.0, 1.0, palette::H_AND_E)
            } else {
                PointStyle::new(2.0, 0.2, palette::NEUTRAL)
            }
        }
        Step::FocusE => {
            if point.has_e {
                let fill = if point.has_h {
                    palette::H_AND_E
                } else {
                    palette::E_ONLY
                };
                PointStyle::new(5.0, 1.0, fill)
            } else {
                PointStyle::new(1.0, 0.05, palette::NEUTRAL)
            }
        }
    }
}

/// Styles of every world at `step`, in insertion order.
pub fn styles_for(points: &[SamplePoint], step: Step) -> Vec<PointStyle> {
    points.iter().map(|p| style_for(p, step)).collect()
}

/// Clamped position within the four steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepCursor {
    step: Step,
}

impl StepCursor {
    pub fn new(step: Step) -> Self {
        Self { step }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn index(&self) -> usize {
        self.step.index()
    }

    /// Whether the "previous" control is enabled.
    pub fn can_prev(&self) -> bool {
        !self.step.is_first()
    }

    /// Whether the "next" control is enabled.
    pub fn can_next(&self) -> bool {
        !self.step.is_last()
    }

    /// Moves forward; returns false (and stays put) at the last step.
    pub fn next(&mut self) -> bool {
        self.go_to(self.step.next())
    }

    /// Moves back; returns false (and stays put) at the first step.
    pub fn prev(&mut self) -> bool {
        self.go_to(self.step.prev())
    }

    /// Jumps to a step index, clamped to [0, 3]. Returns true if it moved.
    pub fn go_to_index(&mut self, index: usize) -> bool {
        self.go_to(Step::from_index(index))
    }

    fn go_to(&mut self, step: Step) -> bool {
        let changed = step != self.step;
        self.step = step;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(has_h: bool, has_e: bool) -> SamplePoint {
        SamplePoint::new(0, 50.0, 50.0, has_h, has_e)
    }

    #[test]
    fn test_step_zero_shows_everything() {
        for (h, e) in [(true, true), (true, false), (false, true), (false, false)] {
            let style = style_for(&world(h, e), Step::AllWorlds);
            assert_eq!(style.radius, 3.0);
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.fill, world(h, e).category_color());
        }
    }

    #[test]
    fn test_step_one_focuses_h() {
        let h_with_e = style_for(&world(true, true), Step::FocusH);
        let h_without_e = style_for(&world(true, false), Step::FocusH);
        let not_h = style_for(&world(false, true), Step::FocusH);

        assert_eq!(h_with_e, PointStyle::new(4.0, 1.0, palette::H_AND_E));
        assert_eq!(h_without_e, PointStyle::new(4.0, 1.0, palette::H_ONLY));
        assert_eq!(not_h, PointStyle::new(2.0, 0.1, palette::NEUTRAL));
    }

    #[test]
    fn test_step_two_highlights_joint() {
        assert_eq!(
            style_for(&world(true, true), Step::Joint),
            PointStyle::new(5.0, 1.0, palette::H_AND_E)
        );
        for (h, e) in [(true, false), (false, true), (false, false)] {
            assert_eq!(
                style_for(&world(h, e), Step::Joint),
                PointStyle::new(2.0, 0.2, palette::NEUTRAL)
            );
        }
    }

    #[test]
    fn test_step_three_focuses_e() {
        assert_eq!(
            style_for(&world(true, true), Step::FocusE),
            PointStyle::new(5.0, 1.0, palette::H_AND_E)
        );
        assert_eq!(
            style_for(&world(false, true), Step::FocusE),
            PointStyle::new(5.0, 1.0, palette::E_ONLY)
        );
        assert_eq!(
            style_for(&world(true, false), Step::FocusE),
            PointStyle::new(1.0, 0.05, palette::NEUTRAL)
        );
    }

    #[test]
    fn test_cursor_clamps_at_bounds() {
        let mut cursor = StepCursor::default();
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.can_prev());
        assert!(!cursor.prev(), "prev at step 0 is a no-op");
        assert_eq!(cursor.index(), 0);

        assert!(cursor.next());
        assert!(cursor.next());
        assert!(cursor.next());
        assert_eq!(cursor.index(), 3);
        assert!(!cursor.can_next());
        assert!(!cursor.next(), "next at step 3 is a no-op");
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn test_cursor_go_to_index_clamps() {
        let mut cursor = StepCursor::default();
        assert!(cursor.go_to_index(17));
        assert_eq!(cursor.step(), Step::FocusE);
        assert!(!cursor.go_to_index(3));
    }
}
