//! Replicating a motif onto the faces of the cube.

use crate::face::Face;
use crate::float_types::{CUBE_HALF_EXTENT, Real};
use crate::motif::{Motif, Primitive, PrimitiveKind, RenderIntent};
use nalgebra::Point3;
use tracing::debug;

/// A [`Primitive`] carried into world space. Same point order and intent.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedPrimitive {
    pub kind: PrimitiveKind,
    pub label: String,
    pub face: Face,
    pub points: Vec<Point3<Real>>,
    pub intent: RenderIntent,
}

impl EmbeddedPrimitive {
    pub fn new(primitive: &Primitive, face: Face) -> Self {
        EmbeddedPrimitive {
            kind: primitive.kind,
            label: primitive.label.clone(),
            face,
            points: face.embed_all(&primitive.points),
            intent: primitive.intent,
        }
    }
}

/// Every primitive of a motif placed on one face.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedMotif {
    pub face: Face,
    pub primitives: Vec<EmbeddedPrimitive>,
}

impl EmbeddedMotif {
    pub fn new(motif: &Motif, face: Face) -> Self {
        EmbeddedMotif {
            face,
            primitives: motif
                .primitives
                .iter()
                .map(|p| EmbeddedPrimitive::new(p, face))
                .collect(),
        }
    }
}

/// Places `motif` on each face in `faces`, in order.
pub fn assemble_on(motif: &Motif, faces: &[Face]) -> Vec<EmbeddedMotif> {
    let assembled: Vec<EmbeddedMotif> = faces
        .iter()
        .map(|f| EmbeddedMotif::new(motif, *f))
        .collect();
    debug!(
        faces = assembled.len(),
        primitives_per_face = motif.len(),
        points_per_face = motif.point_count(),
        "motif assembled"
    );
    assembled
}

/// Places `motif` on all six cube faces. A flat list, face-major, in
/// [`Face::CUBE`] order.
pub fn assemble(motif: &Motif) -> Vec<EmbeddedPrimitive> {
    assemble_on(motif, &Face::CUBE)
        .into_iter()
        .flat_map(|m| m.primitives)
        .collect()
}

/// The 12 edges of the cube as point pairs.
pub fn cube_edges() -> Vec<[Point3<Real>; 2]> {
    let h = CUBE_HALF_EXTENT;
    let corners = [
        Point3::new(-h, -h, -h),
        Point3::new(h, -h, -h),
        Point3::new(h, h, -h),
        Point3::new(-h, h, -h),
        Point3::new(-h, -h, h),
        Point3::new(h, -h, h),
        Point3::new(h, h, h),
        Point3::new(-h, h, h),
    ];
    // bottom ring, top ring, then the verticals
    const EDGES: [[usize; 2]; 12] = [
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ];
    EDGES.iter().map(|[a, b]| [corners[*a], corners[*b]]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_lands_on_every_face() {
        let assembled = assemble(&Motif::square_only());
        assert_eq!(assembled.len(), 6);
        for (prim, face) in assembled.iter().zip(Face::CUBE) {
            assert_eq!(prim.face, face);
            assert_eq!(prim.points.len(), 5);
            assert_eq!(prim.points.first(), prim.points.last());
            let axis = face.constrained_axis() as usize;
            assert!(prim.points.iter().all(|p| p[axis] == face.offset()));
        }
    }

    #[test]
    fn topology_and_intent_are_preserved() {
        let motif = Motif::helicon().unwrap();
        for embedded in assemble_on(&motif, &Face::CUBE) {
            assert_eq!(embedded.primitives.len(), motif.len());
            for (e, p) in embedded.primitives.iter().zip(&motif.primitives) {
                assert_eq!(e.points.len(), p.points.len());
                assert_eq!(e.intent, p.intent);
                assert_eq!(e.label, p.label);
            }
        }
    }

    #[test]
    fn edges_have_unit_cube_length() {
        let edges = cube_edges();
        assert_eq!(edges.len(), 12);
        for [a, b] in edges {
            assert_eq!((b - a).norm(), 2.0 * CUBE_HALF_EXTENT);
        }
    }
}
