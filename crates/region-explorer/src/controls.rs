//! Formula controls.
//!
//! The formula P(H|E) = P(H∩E) / P(E) is split into controls, each bound
//! to the region it highlights. Two bridges sit in the gaps around the
//! fraction bar so crossing the bar does not flash the highlight off.

use bayes_model::{palette, Region, Rgb};
use serde::{Deserialize, Serialize};

use crate::state::RegionExplorer;

/// One interactive fragment of the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaControl {
    /// P(H|E), left of the equals sign.
    Conditional,
    /// P(H∩E), above the fraction bar.
    Numerator,
    /// Gap between the numerator and the bar.
    NumeratorBridge,
    /// P(E), below the fraction bar.
    Denominator,
    /// Gap between the bar and the denominator.
    DenominatorBridge,
}

impl FormulaControl {
    /// Controls in layout order.
    pub const ALL: [FormulaControl; 5] = [
        FormulaControl::Conditional,
        FormulaControl::Numerator,
        FormulaControl::NumeratorBridge,
        FormulaControl::DenominatorBridge,
        FormulaControl::Denominator,
    ];

    /// Region highlighted by this control.
    pub fn region(self) -> Region {
        match self {
            FormulaControl::Conditional => Region::Conditional,
            FormulaControl::Numerator | FormulaControl::NumeratorBridge => Region::Intersection,
            FormulaControl::Denominator | FormulaControl::DenominatorBridge => Region::Evidence,
        }
    }

    /// Bridges only react to hover.
    pub fn clickable(self) -> bool {
        !matches!(
            self,
            FormulaControl::NumeratorBridge | FormulaControl::DenominatorBridge
        )
    }

    /// Formula text, empty for bridges.
    pub fn label(self) -> &'static str {
        match self {
            FormulaControl::Conditional => "P(H|E)",
            FormulaControl::Numerator => "P(H∩E)",
            FormulaControl::Denominator => "P(E)",
            FormulaControl::NumeratorBridge | FormulaControl::DenominatorBridge => "",
        }
    }

    /// Whether the control is drawn in its active state.
    pub fn is_active(self, explorer: &RegionExplorer) -> bool {
        self.clickable() && explorer.effective() == self.region()
    }

    /// Accent color used when active.
    pub fn accent(self) -> Rgb {
        match self.region() {
            Region::Conditional => palette::H_FILL,
            Region::Intersection => palette::INTERSECTION,
            _ => palette::E_FILL,
        }
    }

    /// Forwards a pointer-enter to the explorer.
    pub fn enter(self, explorer: &mut RegionExplorer) {
        explorer.pointer_enter(self.region());
    }

    /// Forwards a click to the explorer. Returns false when ignored.
    pub fn press(self, explorer: &mut RegionExplorer) -> bool {
        if !self.clickable() {
            return false;
        }
        explorer.click(self.region());
        true
    }
}
