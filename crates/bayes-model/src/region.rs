//! Diagram Regions
//!
//! Named subsets of the two-set diagram that the Region Explorer can
//! highlight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A highlightable region of the H/E diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Nothing highlighted.
    #[default]
    None,
    /// H ∩ E.
    Intersection,
    /// The whole E set.
    Evidence,
    /// H within E, i.e. E as the new universe.
    Conditional,
}

impl Region {
    /// True for every variant except `None`.
    pub fn is_some(self) -> bool {
        self != Region::None
    }

    pub fn is_none(self) -> bool {
        self == Region::None
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::None => write!(f, "none"),
            Region::Intersection => write!(f, "intersection"),
            Region::Evidence => write!(f, "evidence"),
            Region::Conditional => write!(f, "conditional"),
        }
    }
}

/// Error type for parsing regions from strings.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid region: '{0}'")]
pub struct ParseRegionError(pub String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Region::None),
            "intersection" => Ok(Region::Intersection),
            "evidence" => Ok(Region::Evidence),
            "conditional" => Ok(Region::Conditional),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}
