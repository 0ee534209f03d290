//! Cube faces and the rigid transforms that place a face's local 2-D frame
//! onto the cube surface.
//!
//! Every rotation here is a signed permutation matrix (entries in `{-1, 0, 1}`).
//! Multiplying by such a matrix only ever scales by ±1 and adds zeros, so the
//! embedded coordinates are exact and the constrained coordinate lands on
//! `±CUBE_HALF_EXTENT` with no drift.

use crate::float_types::{CUBE_HALF_EXTENT, Real};
use nalgebra::{Matrix3, Matrix4, Point2, Point3, Vector3};

/// A cube face. The first six belong to the full cube; `Xy`, `Yz` and `Xz`
/// are the three mutually orthogonal faces used by the projection search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
    Xy,
    Yz,
    Xz,
}

/// World axis index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// Rotation + translation taking `(u, v, 0)` in face space to world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTransform {
    rotation: Matrix3<Real>,
    translation: Vector3<Real>,
}

impl FaceTransform {
    fn new(rows: [[Real; 3]; 3], translation: [Real; 3]) -> Self {
        FaceTransform {
            rotation: Matrix3::new(
                rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2],
                rows[2][0], rows[2][1], rows[2][2],
            ),
            translation: Vector3::new(translation[0], translation[1], translation[2]),
        }
    }

    pub const fn rotation(&self) -> &Matrix3<Real> {
        &self.rotation
    }

    pub const fn translation(&self) -> &Vector3<Real> {
        &self.translation
    }

    /// The transform as a single homogeneous 4×4 matrix.
    pub fn to_homogeneous(&self) -> Matrix4<Real> {
        let mut m = Matrix4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.rotation);
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        m
    }

    /// `p3 = R · (x, y, 0) + t`
    pub fn apply(&self, point: &Point2<Real>) -> Point3<Real> {
        Point3::from(self.rotation * Vector3::new(point.x, point.y, 0.0) + self.translation)
    }
}

impl Face {
    /// The six faces of the full cube.
    pub const CUBE: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// The reduced variant: one face per orthogonal axis pair.
    pub const ORTHOGONAL: [Face; 3] = [Face::Xy, Face::Yz, Face::Xz];

    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Xy => "xy",
            Face::Yz => "yz",
            Face::Xz => "xz",
        }
    }

    /// The world axis held constant on this face.
    pub const fn constrained_axis(self) -> Axis {
        match self {
            Face::Front | Face::Back | Face::Xy => Axis::Z,
            Face::Left | Face::Right | Face::Yz => Axis::X,
            Face::Top | Face::Bottom | Face::Xz => Axis::Y,
        }
    }

    /// Value of the constrained coordinate on this face.
    pub const fn offset(self) -> Real {
        match self {
            Face::Back | Face::Left | Face::Bottom => -CUBE_HALF_EXTENT,
            _ => CUBE_HALF_EXTENT,
        }
    }

    pub fn transform(self) -> FaceTransform {
        let h = CUBE_HALF_EXTENT;
        match self {
            // (x, y, h)
            Face::Front | Face::Xy => FaceTransform::new(
                [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
                [0.0, 0.0, h],
            ),
            // (-x, y, -h)
            Face::Back => FaceTransform::new(
                [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]],
                [0.0, 0.0, -h],
            ),
            // (-h, y, -x)
            Face::Left => FaceTransform::new(
                [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]],
                [-h, 0.0, 0.0],
            ),
            // (h, y, x)
            Face::Right => FaceTransform::new(
                [[0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
                [h, 0.0, 0.0],
            ),
            // (x, h, y)
            Face::Top | Face::Xz => FaceTransform::new(
                [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]],
                [0.0, h, 0.0],
            ),
            // (x, -h, -y)
            Face::Bottom => FaceTransform::new(
                [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]],
                [0.0, -h, 0.0],
            ),
            // (h, x, y)
            Face::Yz => FaceTransform::new(
                [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                [h, 0.0, 0.0],
            ),
        }
    }

    /// Unit vector pointing away from the cube.
    pub fn outward_normal(self) -> Vector3<Real> {
        let mut n = Vector3::zeros();
        n[self.constrained_axis() as usize] = self.offset().signum();
        n
    }

    /// Unit vector pointing from the face into the cube.
    pub fn inward_normal(self) -> Vector3<Real> {
        -self.outward_normal()
    }

    /// Embed a face-local point into world space.
    pub fn embed(self, point: &Point2<Real>) -> Point3<Real> {
        self.transform().apply(point)
    }

    /// Embed a sequence of points, preserving order.
    pub fn embed_all(self, points: &[Point2<Real>]) -> Vec<Point3<Real>> {
        let transform = self.transform();
        points.iter().map(|p| transform.apply(p)).collect()
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Face; 9] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
        Face::Xy,
        Face::Yz,
        Face::Xz,
    ];

    #[test]
    fn rotations_are_proper_and_orthonormal() {
        for face in ALL {
            let r = *face.transform().rotation();
            assert_eq!(r.determinant(), 1.0, "{face}");
            assert_eq!(r * r.transpose(), Matrix3::identity(), "{face}");
        }
    }

    #[test]
    fn embedded_points_lie_exactly_on_face() {
        let samples = [
            Point2::new(-1.0, -1.0),
            Point2::new(0.123456789, -0.987654321),
            Point2::new(1.0 / 3.0, 0.7071067811865476),
            Point2::new(-0.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        for face in ALL {
            let axis = face.constrained_axis() as usize;
            for p in &samples {
                let q = face.embed(p);
                assert_eq!(q[axis], face.offset(), "{face} {p}");
            }
        }
    }

    #[test]
    fn reduced_faces_match_axis_layout() {
        let p = Point2::new(0.25, -0.75);
        assert_eq!(Face::Xy.embed(&p), Point3::new(0.25, -0.75, 1.0));
        assert_eq!(Face::Yz.embed(&p), Point3::new(1.0, 0.25, -0.75));
        assert_eq!(Face::Xz.embed(&p), Point3::new(0.25, 1.0, -0.75));
    }

    #[test]
    fn cube_faces_match_axis_layout() {
        let p = Point2::new(0.25, -0.75);
        assert_eq!(Face::Front.embed(&p), Point3::new(0.25, -0.75, 1.0));
        assert_eq!(Face::Back.embed(&p), Point3::new(-0.25, -0.75, -1.0));
        assert_eq!(Face::Right.embed(&p), Point3::new(1.0, -0.75, 0.25));
        assert_eq!(Face::Left.embed(&p), Point3::new(-1.0, -0.75, -0.25));
        assert_eq!(Face::Top.embed(&p), Point3::new(0.25, 1.0, -0.75));
        assert_eq!(Face::Bottom.embed(&p), Point3::new(0.25, -1.0, 0.75));
    }

    #[test]
    fn homogeneous_form_agrees_with_apply() {
        let p = Point2::new(0.5, 0.2);
        for face in ALL {
            let t = face.transform();
            let h = t.to_homogeneous().transform_point(&Point3::new(p.x, p.y, 0.0));
            assert_eq!(h, t.apply(&p));
        }
    }

    #[test]
    fn normals_point_out_of_and_into_cube() {
        for face in ALL {
            let on_face = face.embed(&Point2::origin());
            assert_eq!(on_face.coords, face.outward_normal());
            assert_eq!(face.inward_normal(), -face.outward_normal());
        }
    }
}
