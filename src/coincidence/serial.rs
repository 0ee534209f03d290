//! Serial implementation of the coincidence search

use crate::coincidence::{CoincidenceCandidate, CoincidenceSearch, match_triple};
use crate::float_types::Real;
use crate::projection::ProjectedPoint;

/// Exhaustive `O(|xy|·|yz|·|xz|)` triple loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialSearch;

impl SerialSearch {
    pub const fn new() -> Self {
        SerialSearch
    }
}

impl CoincidenceSearch for SerialSearch {
    fn search(
        &self,
        xy: &[ProjectedPoint],
        yz: &[ProjectedPoint],
        xz: &[ProjectedPoint],
        tolerance: Real,
    ) -> Vec<CoincidenceCandidate> {
        let mut found = Vec::new();
        for p in xy {
            for q in yz {
                // y is already fixed by p and q; skip the inner loop early
                if (p.position.y - q.position.y).abs() >= tolerance {
                    continue;
                }
                for r in xz {
                    if let Some(candidate) = match_triple(p, q, r, tolerance) {
                        found.push(candidate);
                    }
                }
            }
        }
        found
    }
}
