//! World Statistics
//!
//! Empirical probabilities over the full current point set. Ratios with an
//! empty denominator are `None` rather than NaN.

use serde::{Deserialize, Serialize};

use crate::point::SamplePoint;

/// Placeholder rendered for an undefined probability.
pub const MISSING_PROBABILITY: &str = "n/a";

/// Counts and derived probabilities of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldStats {
    pub total: usize,
    pub h_count: usize,
    pub e_count: usize,
    pub h_and_e_count: usize,
    /// |H| / N
    pub p_h: Option<f64>,
    /// |E| / N
    pub p_e: Option<f64>,
    /// |H ∩ E| / |H|
    pub p_e_given_h: Option<f64>,
    /// |H ∩ E| / |E|
    pub p_h_given_e: Option<f64>,
}

impl WorldStats {
    /// Computes statistics over every point, independent of the active step.
    pub fn from_points(points: &[SamplePoint]) -> Self {
        let total = points.len();
        let h_count = points.iter().filter(|p| p.has_h).count();
        let e_count = points.iter().filter(|p| p.has_e).count();
        let h_and_e_count = points.iter().filter(|p| p.has_both()).count();

        Self {
            total,
            h_count,
            e_count,
            h_and_e_count,
            p_h: ratio(h_count, total),
            p_e: ratio(e_count, total),
            p_e_given_h: ratio(h_and_e_count, h_count),
            p_h_given_e: ratio(h_and_e_count, e_count),
        }
    }

    /// Empirical P(E | not H), for checking the sampler's conditional rates.
    pub fn p_e_given_not_h(&self) -> Option<f64> {
        ratio(self.e_count - self.h_and_e_count, self.total - self.h_count)
    }

    /// (label, formatted value) pairs in display order.
    pub fn display_rows(&self) -> [(&'static str, String); 4] {
        [
            ("P(H)", format_probability(self.p_h)),
            ("P(E|H)", format_probability(self.p_e_given_h)),
            ("P(E)", format_probability(self.p_e)),
            ("P(H|E)", format_probability(self.p_h_given_e)),
        ]
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Formats a probability with three decimals, or the placeholder when undefined.
pub fn format_probability(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.3}", v),
        _ => MISSING_PROBABILITY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: u32, has_h: bool, has_e: bool) -> SamplePoint {
        SamplePoint::new(id, 0.0, 0.0, has_h, has_e)
    }

    #[test]
    fn test_stats_counts() {
        let points = vec![
            point(0, true, true),
            point(1, true, false),
            point(2, false, true),
            point(3, false, false),
        ];
        let stats = WorldStats::from_points(&points);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.h_count, 2);
        assert_eq!(stats.e_count, 2);
        assert_eq!(stats.h_and_e_count, 1);
        assert_eq!(stats.p_h, Some(0.5));
        assert_eq!(stats.p_e, Some(0.5));
        assert_eq!(stats.p_e_given_h, Some(0.5));
        assert_eq!(stats.p_h_given_e, Some(0.5));
        assert_eq!(stats.p_e_given_not_h(), Some(0.5));
    }

    #[test]
    fn test_stats_empty_set() {
        let stats = WorldStats::from_points(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.p_h.is_none());
        assert!(stats.p_e.is_none());
        assert!(stats.p_e_given_h.is_none());
        assert!(stats.p_h_given_e.is_none());
        assert!(stats.p_e_given_not_h().is_none());
    }

    #[test]
    fn test_stats_without_h() {
        let points = vec![point(0, false, true), point(1, false, false)];
        let stats = WorldStats::from_points(&points);
        assert_eq!(stats.p_h, Some(0.0));
        assert!(stats.p_e_given_h.is_none());
        assert_eq!(stats.p_h_given_e, Some(0.0));
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(Some(0.3)), "0.300");
        assert_eq!(format_probability(Some(1.0 / 3.0)), "0.333");
        assert_eq!(format_probability(None), MISSING_PROBABILITY);
        assert_eq!(format_probability(Some(f64::NAN)), MISSING_PROBABILITY);
    }

    #[test]
    fn test_display_rows_order() {
        let rows = WorldStats::from_points(&[]).display_rows();
        let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["P(H)", "P(E|H)", "P(E)", "P(H|E)"]);
        assert!(rows.iter().all(|(_, value)| value == MISSING_PROBABILITY));
    }
}
