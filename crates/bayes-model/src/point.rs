//! Sample Points
//!
//! A sampled "possible world": a position on the canvas plus the two
//! jointly sampled attributes H (hypothesis) and E (evidence).

use serde::{Deserialize, Serialize};

use crate::color::{palette, Rgb};

/// One sampled world.
///
/// Presentation (radius, opacity, fill) is derived per step and never
/// stored here. Point sets are replaced wholesale, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Candidate index within the generation run.
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub has_h: bool,
    pub has_e: bool,
}

impl SamplePoint {
    /// Creates a new point.
    pub fn new(id: u32, x: f64, y: f64, has_h: bool, has_e: bool) -> Self {
        Self {
            id,
            x,
            y,
            has_h,
            has_e,
        }
    }

    /// True when both H and E hold.
    pub fn has_both(&self) -> bool {
        self.has_h && self.has_e
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &SamplePoint) -> f64 {
        self.distance_to_xy(other.x, other.y)
    }

    /// Euclidean distance to a canvas coordinate.
    pub fn distance_to_xy(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Four-way color encoding of (H, E).
    pub fn category_color(&self) -> Rgb {
        match (self.has_h, self.has_e) {
            (true, true) => palette::H_AND_E,
            (true, false) => palette::H_ONLY,
            (false, true) => palette::E_ONLY,
            (false, false) => palette::NEUTRAL,
        }
    }

    /// Tooltip lines describing this world.
    pub fn describe(&self) -> [String; 3] {
        [
            format!("World {}", self.id),
            format!("H: {}", yes_no(self.has_h)),
            format!("E: {}", yes_no(self.has_e)),
        ]
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
