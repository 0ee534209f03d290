//! The planar Helicon motif: an ordered set of named primitives in a face's
//! local `[-1, 1]²` frame.

pub mod markers;
pub mod shapes;

use crate::errors::MotifError;
use crate::float_types::{
    CIRCLE_SEGMENTS, CUBE_HALF_EXTENT, FRAC_PI_2, HARMONIC_RATIOS, PI, Real, SEMICIRCLE_SEGMENTS,
};
use markers::MarkerKind;
use nalgebra::Point2;

/// What a primitive depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Circle,
    Square,
    Semicircle,
    Diagonal,
    Triangle,
    HarmonicLine,
    Markers(MarkerKind),
}

/// How a renderer should draw a primitive's points. Carried as metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderIntent {
    /// Consecutive points joined; last point repeats the first.
    ClosedLoop,
    /// Consecutive points joined; open ends.
    OpenPath,
    /// Isolated points.
    Points,
}

impl RenderIntent {
    pub const fn is_closed(self) -> bool {
        matches!(self, RenderIntent::ClosedLoop)
    }
}

/// A named point sequence in face-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub label: String,
    pub points: Vec<Point2<Real>>,
    pub intent: RenderIntent,
}

impl Primitive {
    pub fn new(
        kind: PrimitiveKind,
        label: impl Into<String>,
        points: Vec<Point2<Real>>,
        intent: RenderIntent,
    ) -> Self {
        Primitive {
            kind,
            label: label.into(),
            points,
            intent,
        }
    }

    pub fn markers(kind: MarkerKind) -> Self {
        Primitive::new(
            PrimitiveKind::Markers(kind),
            kind.label(),
            markers::points_of(kind),
            RenderIntent::Points,
        )
    }
}

/// An ordered collection of primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Motif {
    pub primitives: Vec<Primitive>,
}

/// Semicircles of the reference motif: centre on an edge midpoint, start angle.
const SEMICIRCLES: [(&str, [Real; 2], Real); 4] = [
    ("semicircle-bottom", [0.0, -CUBE_HALF_EXTENT], 0.0),
    ("semicircle-right", [CUBE_HALF_EXTENT, 0.0], FRAC_PI_2),
    ("semicircle-top", [0.0, CUBE_HALF_EXTENT], PI),
    ("semicircle-left", [-CUBE_HALF_EXTENT, 0.0], -FRAC_PI_2),
];

impl Motif {
    pub const fn new() -> Self {
        Motif {
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) -> &mut Self {
        self.primitives.push(primitive);
        self
    }

    /// Builds the full Helicon diagram:
    /// circle, square, four semicircles, two diagonals, the triangle set,
    /// the four harmonic-ratio lines and one marker primitive per [`MarkerKind`].
    pub fn helicon() -> Result<Self, MotifError> {
        Self::helicon_with(CIRCLE_SEGMENTS, SEMICIRCLE_SEGMENTS)
    }

    /// Same as [`Motif::helicon`] with explicit curve sample counts.
    pub fn helicon_with(
        circle_segments: usize,
        semicircle_segments: usize,
    ) -> Result<Self, MotifError> {
        let r = CUBE_HALF_EXTENT;
        let mut motif = Motif::new();

        motif.push(Primitive::new(
            PrimitiveKind::Circle,
            "circle",
            shapes::circle_points(Point2::origin(), r, circle_segments)?,
            RenderIntent::ClosedLoop,
        ));
        motif.push(Primitive::new(
            PrimitiveKind::Square,
            "square",
            shapes::square_points(),
            RenderIntent::ClosedLoop,
        ));

        for (label, [cx, cy], start) in SEMICIRCLES {
            motif.push(Primitive::new(
                PrimitiveKind::Semicircle,
                label,
                shapes::semicircle_points(Point2::new(cx, cy), r, start, semicircle_segments)?,
                RenderIntent::OpenPath,
            ));
        }

        for (i, diagonal) in shapes::diagonal_points().into_iter().enumerate() {
            motif.push(Primitive::new(
                PrimitiveKind::Diagonal,
                format!("diagonal-{}", i + 1),
                diagonal,
                RenderIntent::OpenPath,
            ));
        }

        motif.push(Primitive::new(
            PrimitiveKind::Triangle,
            "triangle",
            shapes::triangle_points(r),
            RenderIntent::ClosedLoop,
        ));
        for (i, ratio) in HARMONIC_RATIOS.into_iter().enumerate() {
            motif.push(Primitive::new(
                PrimitiveKind::Triangle,
                format!("triangle-1/{}", i + 2),
                shapes::harmonic_triangle_points(ratio)?,
                RenderIntent::ClosedLoop,
            ));
        }

        for (i, ratio) in HARMONIC_RATIOS.into_iter().enumerate() {
            motif.push(Primitive::new(
                PrimitiveKind::HarmonicLine,
                format!("harmonic-1/{}", i + 2),
                shapes::harmonic_line_points(ratio)?,
                RenderIntent::OpenPath,
            ));
        }

        for kind in MarkerKind::ALL {
            motif.push(Primitive::markers(kind));
        }

        Ok(motif)
    }

    /// A motif containing only the face square.
    pub fn square_only() -> Self {
        let mut motif = Motif::new();
        motif.push(Primitive::new(
            PrimitiveKind::Square,
            "square",
            shapes::square_points(),
            RenderIntent::ClosedLoop,
        ));
        motif
    }

    /// A motif containing only the inscribed circle.
    pub fn circle_only(segments: usize) -> Result<Self, MotifError> {
        let mut motif = Motif::new();
        motif.push(Primitive::new(
            PrimitiveKind::Circle,
            "circle",
            shapes::circle_points(Point2::origin(), CUBE_HALF_EXTENT, segments)?,
            RenderIntent::ClosedLoop,
        ));
        Ok(motif)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitives of one kind, in motif order.
    pub fn of_kind(&self, kind: PrimitiveKind) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.kind == kind)
    }

    /// Total number of points across all primitives.
    pub fn point_count(&self) -> usize {
        self.primitives.iter().map(|p| p.points.len()).sum()
    }
}
