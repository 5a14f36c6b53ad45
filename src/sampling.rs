//! Star position sampling
//!
//! Foreground pixels of the filled mask are collected in row-major order
//! and a subset is drawn uniformly without replacement.

use crate::error::{Result, StarfieldError};
use crate::models::{BitMatrix, PointI};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Coordinates of every foreground cell, row by row
pub fn collect_points(mask: &BitMatrix) -> Vec<PointI> {
    mask.iter_ones().map(PointI::from).collect()
}

/// Draw `count` distinct points uniformly at random
pub fn sample_points<R: Rng + ?Sized>(
    points: &[PointI],
    count: usize,
    rng: &mut R,
) -> Result<Vec<PointI>> {
    if count > points.len() {
        return Err(StarfieldError::InsufficientPoints {
            requested: count,
            available: points.len(),
        });
    }

    Ok(rand::seq::index::sample(rng, points.len(), count)
        .into_iter()
        .map(|i| points[i])
        .collect())
}

/// Owns the RNG used for drawing stars
pub struct StarSampler {
    rng: StdRng,
}

impl StarSampler {
    /// Seeded sampler when `seed` is given, OS entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Sample `count` stars from the foreground of `mask`
    pub fn sample_mask(&mut self, mask: &BitMatrix, count: usize) -> Result<Vec<PointI>> {
        let points = collect_points(mask);
        log::debug!(
            "sampling {} of {} foreground pixels",
            count,
            points.len()
        );
        sample_points(&points, count, &mut self.rng)
    }
}
