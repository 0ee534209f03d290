//! Cross-face coincidence search
//!
//! Points launched inward from the three orthogonal faces each pin down two
//! world coordinates. A coincidence is a triple `(p, q, r)` from the `xy`, `yz`
//! and `xz` faces whose shared coordinates agree within a tolerance:
//!
//! ```text
//! |p.y - q.y| < ε,  |q.z - r.z| < ε,  |r.x - p.x| < ε
//! composite = (r.x, p.y, q.z) ∈ [-1, 1]³
//! ```
//!
//! The search itself is exhaustive over all triples and sits behind the
//! [`CoincidenceSearch`] trait, allowing for serial and parallel implementations.

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialSearch;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSearch;

/// The search strategy selected by the enabled cargo features.
#[cfg(not(feature = "parallel"))]
pub type DefaultSearch = SerialSearch;
/// The search strategy selected by the enabled cargo features.
#[cfg(feature = "parallel")]
pub type DefaultSearch = ParallelSearch;

use crate::face::Face;
use crate::float_types::{
    CUBE_HALF_EXTENT, DEFAULT_COINCIDENCE_TOLERANCE, MAX_DEDUP_PRECISION, Real,
};
use crate::projection::{FaceProjection, ProjectedPoint};
use hashbrown::HashSet;
use nalgebra::Point3;
use tracing::{debug, info, trace};

/// A 3-D point where projections from the three orthogonal faces agree,
/// together with the contributing points (`xy`, `yz`, `xz` order).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoincidenceCandidate {
    pub point: Point3<Real>,
    pub sources: [ProjectedPoint; 3],
}

impl CoincidenceCandidate {
    pub const fn xy(&self) -> &ProjectedPoint {
        &self.sources[0]
    }

    pub const fn yz(&self) -> &ProjectedPoint {
        &self.sources[1]
    }

    pub const fn xz(&self) -> &ProjectedPoint {
        &self.sources[2]
    }

    /// Pairwise differences on the shared axes: `(Δy, Δz, Δx)`.
    pub fn deviations(&self) -> [Real; 3] {
        let (p, q, r) = (
            self.xy().position,
            self.yz().position,
            self.xz().position,
        );
        [(p.y - q.y).abs(), (q.z - r.z).abs(), (r.x - p.x).abs()]
    }

    /// Largest of [`deviations`](Self::deviations).
    pub fn max_deviation(&self) -> Real {
        self.deviations().into_iter().fold(0.0, Real::max)
    }

    /// Source indices into each face's candidate set, `xy`, `yz`, `xz` order.
    pub fn source_indices(&self) -> [usize; 3] {
        [self.sources[0].source, self.sources[1].source, self.sources[2].source]
    }
}

/// Test one triple. Returns the candidate when the shared coordinates agree
/// within `tolerance` and the composite point lies inside the cube.
#[inline]
pub fn match_triple(
    p: &ProjectedPoint,
    q: &ProjectedPoint,
    r: &ProjectedPoint,
    tolerance: Real,
) -> Option<CoincidenceCandidate> {
    let x = r.position.x;
    let y = p.position.y;
    let z = q.position.z;

    if (p.position.y - q.position.y).abs() < tolerance
        && (q.position.z - r.position.z).abs() < tolerance
        && (r.position.x - p.position.x).abs() < tolerance
    {
        let point = Point3::new(x, y, z);
        if point.coords.iter().all(|c| c.abs() <= CUBE_HALF_EXTENT) {
            return Some(CoincidenceCandidate {
                point,
                sources: [*p, *q, *r],
            });
        }
    }
    None
}

/// Strategy for enumerating matching triples.
///
/// Implementations must return candidates ordered by `(xy, yz, xz)` index,
/// so serial and parallel searches agree.
pub trait CoincidenceSearch {
    fn search(
        &self,
        xy: &[ProjectedPoint],
        yz: &[ProjectedPoint],
        xz: &[ProjectedPoint],
        tolerance: Real,
    ) -> Vec<CoincidenceCandidate>;
}

/// Knobs for a resolve run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// ε for the shared-axis comparisons.
    pub tolerance: Real,
    /// Collapse candidates whose composite points round to the same value.
    pub deduplicate: bool,
    /// Decimal places used for the dedup rounding, capped at
    /// [`MAX_DEDUP_PRECISION`].
    pub dedup_precision: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            tolerance: DEFAULT_COINCIDENCE_TOLERANCE,
            deduplicate: false,
            dedup_precision: 6,
        }
    }
}

/// Finds coincidences between the `xy`, `yz` and `xz` projection sets.
#[derive(Debug, Clone, Default)]
pub struct CoincidenceResolver<S: CoincidenceSearch = DefaultSearch> {
    pub config: ResolverConfig,
    search: S,
}

impl CoincidenceResolver<DefaultSearch> {
    pub fn new(config: ResolverConfig) -> Self {
        CoincidenceResolver {
            config,
            search: DefaultSearch::default(),
        }
    }
}

impl<S: CoincidenceSearch> CoincidenceResolver<S> {
    pub const fn with_search(config: ResolverConfig, search: S) -> Self {
        CoincidenceResolver { config, search }
    }

    pub fn tolerance(mut self, tolerance: Real) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    pub fn deduplicate(mut self, deduplicate: bool) -> Self {
        self.config.deduplicate = deduplicate;
        self
    }

    /// Runs the search. Empty input on any face yields an empty result.
    ///
    /// Projections are expected to come from `Xy`, `Yz` and `Xz` in that
    /// order. A mismatch is logged but still searched; only positions matter.
    pub fn resolve(
        &self,
        xy: &FaceProjection,
        yz: &FaceProjection,
        xz: &FaceProjection,
    ) -> Vec<CoincidenceCandidate> {
        for (projection, expected) in [(xy, Face::Xy), (yz, Face::Yz), (xz, Face::Xz)] {
            if projection.face != expected {
                debug!(
                    face = %projection.face,
                    expected = %expected,
                    "projection set passed for a different face"
                );
            }
        }

        if xy.is_empty() || yz.is_empty() || xz.is_empty() {
            debug!(
                xy = xy.len(),
                yz = yz.len(),
                xz = xz.len(),
                "empty projection set, nothing to resolve"
            );
            return Vec::new();
        }

        debug!(
            xy = xy.len(),
            yz = yz.len(),
            xz = xz.len(),
            tolerance = self.config.tolerance,
            "searching for coincidences"
        );

        let found = self
            .search
            .search(&xy.points, &yz.points, &xz.points, self.config.tolerance);

        for candidate in &found {
            trace!(
                x = candidate.point.x,
                y = candidate.point.y,
                z = candidate.point.z,
                sources = ?candidate.source_indices(),
                "coincidence"
            );
        }

        let total = found.len();
        let result = if self.config.deduplicate {
            dedup_by_rounding(found, self.config.dedup_precision)
        } else {
            found
        };

        info!(
            candidates = total,
            kept = result.len(),
            deduplicate = self.config.deduplicate,
            "coincidence search finished"
        );
        result
    }

    /// Convenience entry point for already-embedded world points.
    pub fn resolve_points(
        &self,
        xy: &[Point3<Real>],
        yz: &[Point3<Real>],
        xz: &[Point3<Real>],
    ) -> Vec<CoincidenceCandidate> {
        self.resolve(
            &FaceProjection::from_world(Face::Xy, xy),
            &FaceProjection::from_world(Face::Yz, yz),
            &FaceProjection::from_world(Face::Xz, xz),
        )
    }
}

/// Keeps the first candidate for every composite point, after rounding each
/// coordinate to `precision` decimal places.
///
/// `precision` is clamped to [`MAX_DEDUP_PRECISION`]; finer rounding cannot
/// separate points the float type can't already tell apart.
pub fn dedup_by_rounding(
    candidates: Vec<CoincidenceCandidate>,
    precision: u32,
) -> Vec<CoincidenceCandidate> {
    let precision = precision.min(MAX_DEDUP_PRECISION);
    let scale = (10.0 as Real).powi(precision as i32);
    // `+ 0.0` folds -0.0 into 0.0 so both share a key
    let key = |c: Real| ((c * scale).round() + 0.0).to_bits();
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| seen.insert((key(c.point.x), key(c.point.y), key(c.point.z))))
        .collect()
}
