//! Projected points and the inward projection segments launched from them.

use crate::face::Face;
use crate::float_types::{PROJECTION_DEPTH, Real};
use nalgebra::{Point2, Point3};

/// A world-space point remembering where it came from.
///
/// `source` is the index of the originating 2-D point within the candidate
/// set its [`FaceProjection`] was built from. It is a lookup key, not a
/// reference, so a `ProjectedPoint` never borrows from that set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub position: Point3<Real>,
    pub face: Face,
    pub source: usize,
    pub local: Point2<Real>,
}

impl ProjectedPoint {
    pub fn new(face: Face, source: usize, local: Point2<Real>) -> Self {
        ProjectedPoint {
            position: face.embed(&local),
            face,
            source,
            local,
        }
    }
}

/// Line from a projected point into the cube along the face's inward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionSegment {
    pub start: ProjectedPoint,
    pub end: Point3<Real>,
}

impl ProjectionSegment {
    pub fn length(&self) -> Real {
        (self.end - self.start.position).norm()
    }
}

/// `end = start + depth · inward_normal(face)`
pub fn project(point: &ProjectedPoint, depth: Real) -> ProjectionSegment {
    ProjectionSegment {
        start: *point,
        end: project_point(&point.position, point.face, depth),
    }
}

/// Same as [`project`] for a bare world point on `face`.
pub fn project_point(point: &Point3<Real>, face: Face, depth: Real) -> Point3<Real> {
    *point + face.inward_normal() * depth
}

/// The candidate points of one face, embedded in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceProjection {
    pub face: Face,
    pub points: Vec<ProjectedPoint>,
}

impl FaceProjection {
    pub fn new(face: Face, candidates: &[Point2<Real>]) -> Self {
        let points = candidates
            .iter()
            .enumerate()
            .map(|(i, p)| ProjectedPoint::new(face, i, *p))
            .collect();
        FaceProjection { face, points }
    }

    /// Wraps already-embedded points. Each point's `source` is its position
    /// in `positions`, and `local` is recovered by inverting the face transform.
    pub fn from_world(face: Face, positions: &[Point3<Real>]) -> Self {
        let transform = face.transform();
        let inverse = transform.rotation().transpose();
        let points = positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let local = inverse * (p.coords - transform.translation());
                ProjectedPoint {
                    position: *p,
                    face,
                    source: i,
                    local: Point2::new(local.x, local.y),
                }
            })
            .collect();
        FaceProjection { face, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// One segment per point, `depth` long.
    pub fn segments(&self, depth: Real) -> Vec<ProjectionSegment> {
        self.points.iter().map(|p| project(p, depth)).collect()
    }

    /// Segments spanning the full cube.
    pub fn full_depth_segments(&self) -> Vec<ProjectionSegment> {
        self.segments(PROJECTION_DEPTH)
    }
}
