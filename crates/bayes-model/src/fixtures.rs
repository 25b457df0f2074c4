//! Sample point sets for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // bayes-model = { workspace = true, features = ["test-fixtures"] }
//!
//! use bayes_model::fixtures;
//!
//! let points = fixtures::balanced_points();
//! ```

use crate::SamplePoint;

/// Returns the sample point set from the fixtures file.
///
/// Contains 8 worlds on a 140x100 canvas (ids 3 and 8 were dropped during
/// placement):
/// - 2 worlds with H and E
/// - 1 world with H only
/// - 2 worlds with E only
/// - 3 worlds with neither
pub fn balanced_points() -> Vec<SamplePoint> {
    let json = include_str!("../tests/fixtures/sample_points.json");
    serde_json::from_str(json).expect("Failed to parse sample_points.json")
}

/// A small set in which no world has H.
pub fn points_without_h() -> Vec<SamplePoint> {
    (0..5)
        .map(|i| SamplePoint::new(i, 30.0 + 10.0 * i as f64, 30.0, false, i % 2 == 0))
        .collect()
}

/// A small set in which no world has E.
pub fn points_without_e() -> Vec<SamplePoint> {
    (0..5)
        .map(|i| SamplePoint::new(i, 30.0, 30.0 + 10.0 * i as f64, i % 2 == 1, false))
        .collect()
}

/// Returns the world with the given id from the balanced set.
pub fn get_point(id: u32) -> Option<SamplePoint> {
    balanced_points().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorldStats;

    #[test]
    fn test_balanced_points_load() {
        let points = balanced_points();
        assert_eq!(points.len(), 8);

        let stats = WorldStats::from_points(&points);
        assert_eq!(stats.h_count, 3);
        assert_eq!(stats.e_count, 4);
        assert_eq!(stats.h_and_e_count, 2);
    }

    #[test]
    fn test_dropped_ids_are_absent() {
        assert!(get_point(3).is_none());
        assert!(get_point(8).is_none());
        assert!(get_point(9).is_some());
    }

    #[test]
    fn test_degenerate_sets() {
        assert!(points_without_h().iter().all(|p| !p.has_h));
        assert!(points_without_e().iter().all(|p| !p.has_e));
    }
}
