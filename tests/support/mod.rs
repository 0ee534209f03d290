//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use helicon::{
    CoincidenceCandidate, FaceProjection,
    face::Face,
    float_types::Real,
    motif::markers::{self, MarkerKind},
};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The projection-cluster candidates embedded on the `xy`, `yz` and `xz` faces.
pub fn cluster_projections() -> [FaceProjection; 3] {
    let candidates = markers::points_of(MarkerKind::ProjectionCluster);
    Face::ORTHOGONAL.map(|face| FaceProjection::new(face, &candidates))
}

/// Same candidates on every orthogonal face.
pub fn projections_of(candidates: &[Point2<Real>]) -> [FaceProjection; 3] {
    Face::ORTHOGONAL.map(|face| FaceProjection::new(face, candidates))
}

/// Candidates as sortable keys: composite point bits plus source indices.
pub fn candidate_keys(candidates: &[CoincidenceCandidate]) -> Vec<([u64; 3], [usize; 3])> {
    let mut keys: Vec<_> = candidates
        .iter()
        .map(|c| {
            (
                [
                    (c.point.x as f64).to_bits(),
                    (c.point.y as f64).to_bits(),
                    (c.point.z as f64).to_bits(),
                ],
                c.source_indices(),
            )
        })
        .collect();
    keys.sort();
    keys
}
