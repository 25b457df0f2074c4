//! Presentation Steps
//!
//! The World Sampler walks through Bayes' theorem in four fixed steps.
//!
//! # Example
//!
//! ```
//! use bayes_model::Step;
//!
//! let step = Step::AllWorlds;
//! assert_eq!(step.prev(), Step::AllWorlds);
//! assert_eq!(step.next(), Step::FocusH);
//! assert_eq!(Step::from_index(9), Step::FocusE);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of presentation steps.
pub const STEP_COUNT: usize = 4;

/// One of the four fixed presentation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Every world at full visibility.
    #[default]
    AllWorlds,
    /// P(E|H): worlds where H holds.
    FocusH,
    /// P(E|H) x P(H): worlds where both hold.
    Joint,
    /// Divide by P(E): worlds where E holds.
    FocusE,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Step; STEP_COUNT] = [Step::AllWorlds, Step::FocusH, Step::Joint, Step::FocusE];

    /// Zero-based index of this step.
    pub fn index(self) -> usize {
        match self {
            Step::AllWorlds => 0,
            Step::FocusH => 1,
            Step::Joint => 2,
            Step::FocusE => 3,
        }
    }

    /// Step for an index, clamped to the last step.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(STEP_COUNT - 1)]
    }

    /// The following step; saturates at the last one.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step; saturates at the first one.
    pub fn prev(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    pub fn is_first(self) -> bool {
        self == Step::AllWorlds
    }

    pub fn is_last(self) -> bool {
        self == Step::FocusE
    }

    /// Caption shown under the navigation controls.
    pub fn description(self) -> &'static str {
        match self {
            Step::AllWorlds => {
                "All Possible Worlds: Green = H is true, Red = H is false, Bright = E is true"
            }
            Step::FocusH => "P(E|H): Focusing on worlds where H is true. How many also have E?",
            Step::Joint => "P(E|H) × P(H): Zooming out - worlds with both H and E highlighted",
            Step::FocusE => "÷ P(E): Zooming in - among all E-worlds, what fraction have H?",
        }
    }

    /// Position label, e.g. "Step 2 of 4".
    pub fn label(self) -> String {
        format!("Step {} of {}", self.index() + 1, STEP_COUNT)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::AllWorlds => write!(f, "all_worlds"),
            Step::FocusH => write!(f, "focus_h"),
            Step::Joint => write!(f, "joint"),
            Step::FocusE => write!(f, "focus_e"),
        }
    }
}

/// Error type for parsing steps from strings.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid step: '{0}', expected 0-3 or a step name")]
pub struct ParseStepError(pub String);

impl FromStr for Step {
    type Err = ParseStepError;

    /// Accepts either the zero-based index ("0".."3") or the step name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Step::ALL
                .get(index)
                .copied()
                .ok_or_else(|| ParseStepError(s.to_string()));
        }

        match trimmed.to_lowercase().as_str() {
            "all_worlds" => Ok(Step::AllWorlds),
            "focus_h" => Ok(Step::FocusH),
            "joint" => Ok(Step::Joint),
            "focus_e" => Ok(Step::FocusE),
            _ => Err(ParseStepError(s.to_string())),
        }
    }
}
