//! Color Types
//!
//! 8-bit sRGB colors and the light/dark presentation mode.
//!
//! # Example
//!
//! ```
//! use bayes_model::Rgb;
//!
//! let green: Rgb = "#22c55e".parse().unwrap();
//! assert_eq!(green, Rgb::new(0x22, 0xc5, 0x5e));
//! assert_eq!(green.to_string(), "#22c55e");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed colors used by both widgets.
pub mod palette {
    use super::Rgb;

    /// World where both H and E hold.
    pub const H_AND_E: Rgb = Rgb::new(0x22, 0xc5, 0x5e);
    /// World where H holds but E does not.
    pub const H_ONLY: Rgb = Rgb::new(0x16, 0xa3, 0x4a);
    /// World where E holds but H does not.
    pub const E_ONLY: Rgb = Rgb::new(0xef, 0x44, 0x44);
    /// Neither attribute, also used for dimmed worlds.
    pub const NEUTRAL: Rgb = Rgb::new(0x94, 0xa3, 0xb8);

    pub const H_FILL: Rgb = Rgb::new(0x3b, 0x82, 0xf6);
    pub const H_STROKE: Rgb = Rgb::new(0x1d, 0x4e, 0xd8);
    pub const E_FILL: Rgb = Rgb::new(0x10, 0xb9, 0x81);
    pub const E_STROKE: Rgb = Rgb::new(0x05, 0x96, 0x69);
    /// Overlay color for the plain intersection.
    pub const INTERSECTION: Rgb = Rgb::new(0x8b, 0x5c, 0xf6);

    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
}

/// An opaque 8-bit sRGB color.
///
/// Serializes to a lowercase hex string like "#94a3b8".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation per channel; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round() as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Channels as floats in [0, 1].
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error type for parsing colors from hex strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("invalid color '{0}', expected '#rrggbb'")]
    InvalidFormat(String),
    #[error("invalid hex digits in color '{0}'")]
    InvalidDigits(String),
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parses "#rrggbb" (the leading '#' is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError::InvalidFormat(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ParseColorError::InvalidDigits(s.to_string()))
        };

        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

// Serialize as a hex string
impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Light or dark presentation mode of the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Outline color applied to the hovered world.
    pub fn hover_outline(self) -> Rgb {
        match self {
            Theme::Light => palette::BLACK,
            Theme::Dark => palette::WHITE,
        }
    }

    /// Tooltip background as (color, alpha).
    pub fn tooltip_background(self) -> (Rgb, f64) {
        match self {
            Theme::Light => (palette::BLACK, 0.8),
            Theme::Dark => (Rgb::new(55, 65, 81), 0.95),
        }
    }

    /// Tooltip border as (color, alpha), if the mode draws one.
    pub fn tooltip_border(self) -> Option<(Rgb, f64)> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some((Rgb::new(75, 85, 99), 0.5)),
        }
    }
}
