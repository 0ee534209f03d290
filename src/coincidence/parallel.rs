//! Parallel implementation of the coincidence search

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::coincidence::{CoincidenceCandidate, CoincidenceSearch, match_triple};
use crate::float_types::Real;
use crate::projection::ProjectedPoint;

/// Splits the outer `xy` loop across the rayon pool. Results are collected
/// in `xy` order, so they match the serial search output exactly.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelSearch;

#[cfg(feature = "parallel")]
impl ParallelSearch {
    pub const fn new() -> Self {
        ParallelSearch
    }
}

#[cfg(feature = "parallel")]
impl CoincidenceSearch for ParallelSearch {
    fn search(
        &self,
        xy: &[ProjectedPoint],
        yz: &[ProjectedPoint],
        xz: &[ProjectedPoint],
        tolerance: Real,
    ) -> Vec<CoincidenceCandidate> {
        xy.par_iter()
            .flat_map_iter(|p| {
                yz.iter()
                    .filter(move |q| (p.position.y - q.position.y).abs() < tolerance)
                    .flat_map(move |q| {
                        xz.iter().filter_map(move |r| match_triple(p, q, r, tolerance))
                    })
            })
            .collect()
    }
}
