//! Per-region styling of the Venn diagram.

use bayes_model::{palette, Region, Rgb};
use serde::{Deserialize, Serialize};

/// Paint of one set circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    pub fill: Rgb,
    pub fill_opacity: f64,
    pub stroke: Rgb,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
}

impl CircleStyle {
    /// Resting style: fill 0.4, 2px opaque stroke.
    pub const fn resting(fill: Rgb, stroke: Rgb) -> Self {
        Self {
            fill,
            fill_opacity: 0.4,
            stroke,
            stroke_width: 2.0,
            stroke_opacity: 1.0,
        }
    }

    const fn faded(self) -> Self {
        Self {
            fill_opacity: 0.15,
            stroke_opacity: 0.3,
            ..self
        }
    }

    const fn emphasized(self) -> Self {
        Self {
            fill_opacity: 0.8,
            stroke_width: 4.0,
            ..self
        }
    }

    const fn muted(self) -> Self {
        Self {
            fill_opacity: 0.1,
            stroke_width: 1.0,
            ..self
        }
    }
}

/// Paint of the lens overlay; an opacity of 0 hides it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub fill: Rgb,
    pub opacity: f64,
}

impl OverlayStyle {
    pub const HIDDEN: OverlayStyle = OverlayStyle {
        fill: palette::INTERSECTION,
        opacity: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Full diagram styling for one highlighted region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStyles {
    pub h: CircleStyle,
    pub e: CircleStyle,
    pub overlay: OverlayStyle,
}

impl RegionStyles {
    /// Styles for the given effective region.
    pub fn for_region(region: Region) -> Self {
        let h = CircleStyle::resting(palette::H_FILL, palette::H_STROKE);
        let e = CircleStyle::resting(palette::E_FILL, palette::E_STROKE);

        match region {
            Region::None => Self {
                h,
                e,
                overlay: OverlayStyle::HIDDEN,
            },
            Region::Intersection => Self {
                h: h.faded(),
                e: e.faded(),
                overlay: OverlayStyle {
                    fill: palette::INTERSECTION,
                    opacity: 0.9,
                },
            },
            Region::Evidence => Self {
                h: h.muted(),
                e: e.emphasized(),
                overlay: OverlayStyle::HIDDEN,
            },
            // E becomes the universe, H's share of it is shown in blue
            Region::Conditional => Self {
                h: h.muted(),
                e: e.emphasized(),
                overlay: OverlayStyle {
                    fill: palette::H_FILL,
                    opacity: 0.8,
                },
            },
        }
    }
}

impl Default for RegionStyles {
    fn default() -> Self {
        Self::for_region(Region::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_styles() {
        let styles = RegionStyles::for_region(Region::None);
        assert_eq!(styles.h.fill_opacity, 0.4);
        assert_eq!(styles.e.stroke_width, 2.0);
        assert_eq!(styles.h.stroke_opacity, 1.0);
        assert!(!styles.overlay.is_visible());
    }

    #[test]
    fn test_intersection_styles() {
        let styles = RegionStyles::for_region(Region::Intersection);
        assert_eq!(styles.overlay.fill, palette::INTERSECTION);
        assert_eq!(styles.overlay.opacity, 0.9);
        assert_eq!(styles.h.fill_opacity, 0.15);
        assert_eq!(styles.e.stroke_opacity, 0.3);
    }

    #[test]
    fn test_evidence_styles() {
        let styles = RegionStyles::for_region(Region::Evidence);
        assert_eq!(styles.e.fill_opacity, 0.8);
        assert_eq!(styles.e.stroke_width, 4.0);
        assert_eq!(styles.h.fill_opacity, 0.1);
        assert_eq!(styles.h.stroke_width, 1.0);
        assert!(!styles.overlay.is_visible());
    }

    #[test]
    fn test_conditional_extends_evidence() {
        let evidence = RegionStyles::for_region(Region::Evidence);
        let conditional = RegionStyles::for_region(Region::Conditional);
        assert_eq!(conditional.h, evidence.h);
        assert_eq!(conditional.e, evidence.e);
        assert_eq!(conditional.overlay.fill, palette::H_FILL);
        assert_eq!(conditional.overlay.opacity, 0.8);
    }

    #[test]
    fn test_strokes_never_change_color() {
        for region in [
            Region::None,
            Region::Intersection,
            Region::Evidence,
            Region::Conditional,
        ] {
            let styles = RegionStyles::for_region(region);
            assert_eq!(styles.h.stroke, palette::H_STROKE);
            assert_eq!(styles.e.stroke, palette::E_STROKE);
        }
    }

    #[test]
    fn test_styles_export_hex_colors() {
        let styles = RegionStyles::for_region(Region::Conditional);
        let json = serde_json::to_value(styles).unwrap();
        assert_eq!(json["overlay"]["fill"], "#3b82f6");
        assert_eq!(json["e"]["stroke"], "#059669");

        let back: RegionStyles = serde_json::from_value(json).unwrap();
        assert_eq!(back, styles);
    }
}
