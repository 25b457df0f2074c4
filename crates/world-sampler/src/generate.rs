//! World Generation
//!
//! Samples the (H, E) attributes of each candidate world and places it on
//! the canvas with rejection sampling so that no two worlds sit closer than
//! the configured minimum distance.

use bayes_model::SamplePoint;
use rand::Rng;

use crate::config::GenerationConfig;

/// Axis-aligned region that world centers may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlacementBounds {
    /// Bounds for a canvas, or `None` when the canvas is invalid or too
    /// small to leave any room inside the padding.
    pub fn for_canvas(width: f64, height: f64, padding: f64) -> Option<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }

        let bounds = Self {
            min_x: padding,
            max_x: width - padding,
            min_y: padding,
            max_y: height - padding,
        };
        if bounds.max_x < bounds.min_x || bounds.max_y < bounds.min_y {
            return None;
        }
        Some(bounds)
    }

    /// True if the point lies inside the bounds (inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let x = self.min_x + rng.gen::<f64>() * (self.max_x - self.min_x);
        let y = self.min_y + rng.gen::<f64>() * (self.max_y - self.min_y);
        (x, y)
    }
}

/// Generates up to `config.population` worlds for a `width` x `height` canvas.
///
/// Each candidate draws `has_h` with P(H), then `has_e` with P(E|H) or
/// P(E|not H). It then gets `max_attempts` tries at a uniformly random
/// position no closer than `min_distance` to any world already placed.
/// Candidates that never fit are dropped, so the result may be shorter than
/// the population. Ids are candidate indices and keep generation order.
///
/// Invalid or too-small canvases yield an empty set.
pub fn generate_worlds<R: Rng + ?Sized>(
    width: f64,
    height: f64,
    config: &GenerationConfig,
    rng: &mut R,
) -> Vec<SamplePoint> {
    let Some(bounds) = PlacementBounds::for_canvas(width, height, config.padding()) else {
        tracing::warn!(
            "Skipping world generation: canvas {}x{} leaves no room inside padding {}",
            width,
            height,
            config.padding()
        );
        return Vec::new();
    };

    let mut worlds: Vec<SamplePoint> = Vec::with_capacity(config.population);
    let mut dropped = 0usize;

    for index in 0..config.population {
        let has_h = rng.gen::<f64>() < config.p_h;
        let p_e = if has_h {
            config.p_e_given_h
        } else {
            config.p_e_given_not_h
        };
        let has_e = rng.gen::<f64>() < p_e;

        let mut placed = false;
        for _ in 0..config.max_attempts {
            let (x, y) = bounds.sample(rng);
            if is_clear(&worlds, x, y, config.min_distance) {
                worlds.push(SamplePoint::new(index as u32, x, y, has_h, has_e));
                placed = true;
                break;
            }
        }

        if !placed {
            dropped += 1;
            tracing::trace!(
                "Dropped world {} after {} placement attempts",
                index,
                config.max_attempts
            );
        }
    }

    tracing::debug!(
        "Generated {} worlds on {}x{} canvas ({} dropped)",
        worlds.len(),
        width,
        height,
        dropped
    );

    worlds
}

/// True if (x, y) is at least `min_distance` from every placed world.
fn is_clear(worlds: &[SamplePoint], x: f64, y: f64, min_distance: f64) -> bool {
    worlds
        .iter()
        .all(|world| world.distance_to_xy(x, y) >= min_distance)
}

/// Smallest pairwise distance in a point set, if it has at least two points.
pub fn min_pairwise_distance(points: &[SamplePoint]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.distance_to(b);
            best = Some(best.map_or(d, |current| current.min(d)));
        }
    }
    best
}
