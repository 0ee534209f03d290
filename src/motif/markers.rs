//! Named catalogue of marker points on a Helicon face.
//!
//! These are hand-picked locations (curve crossings, grid nodes and the
//! candidate points used for cross-face projection), not values derived from
//! curve equations. Keeping them in a single table makes them auditable.

use crate::float_types::Real;
use nalgebra::Point2;

/// Which family a marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Structural grid nodes: centre, corners, edge midpoints, quarter points,
    /// inner ring and circle/diagonal crossings.
    Grid,
    /// Triangle edges crossing a semicircle.
    TriangleSemicircle,
    /// Triangle edges crossing a diagonal.
    TriangleDiagonal,
    /// Triangle edges crossing a bisector.
    TriangleBisection,
    /// Candidate points launched inward from each face in the projection search.
    ProjectionCluster,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 5] = [
        MarkerKind::Grid,
        MarkerKind::TriangleSemicircle,
        MarkerKind::TriangleDiagonal,
        MarkerKind::TriangleBisection,
        MarkerKind::ProjectionCluster,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MarkerKind::Grid => "grid",
            MarkerKind::TriangleSemicircle => "triangle-semicircle",
            MarkerKind::TriangleDiagonal => "triangle-diagonal",
            MarkerKind::TriangleBisection => "triangle-bisection",
            MarkerKind::ProjectionCluster => "projection-cluster",
        }
    }
}

/// One entry of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: &'static str,
    pub kind: MarkerKind,
    pub coords: [Real; 2],
}

impl Marker {
    const fn new(id: &'static str, kind: MarkerKind, x: Real, y: Real) -> Self {
        Marker { id, kind, coords: [x, y] }
    }

    pub fn point(&self) -> Point2<Real> {
        Point2::new(self.coords[0], self.coords[1])
    }
}

use MarkerKind::*;

pub const MARKERS: &[Marker] = &[
    // centre
    Marker::new("G0", Grid, 0.0, 0.0),
    // square corners
    Marker::new("G1", Grid, -1.0, -1.0),
    Marker::new("G2", Grid, 1.0, -1.0),
    Marker::new("G3", Grid, 1.0, 1.0),
    Marker::new("G4", Grid, -1.0, 1.0),
    // edge midpoints
    Marker::new("G5", Grid, 0.0, -1.0),
    Marker::new("G6", Grid, 1.0, 0.0),
    Marker::new("G7", Grid, 0.0, 1.0),
    Marker::new("G8", Grid, -1.0, 0.0),
    // quarter points on each edge
    Marker::new("G9", Grid, -0.5, -1.0),
    Marker::new("G10", Grid, 0.5, -1.0),
    Marker::new("G11", Grid, 1.0, -0.5),
    Marker::new("G12", Grid, 1.0, 0.5),
    Marker::new("G13", Grid, 0.5, 1.0),
    Marker::new("G14", Grid, -0.5, 1.0),
    Marker::new("G15", Grid, -1.0, 0.5),
    Marker::new("G16", Grid, -1.0, -0.5),
    // inner ring
    Marker::new("G17", Grid, -0.5, 0.0),
    Marker::new("G18", Grid, 0.5, 0.0),
    Marker::new("G19", Grid, 0.0, -0.5),
    Marker::new("G20", Grid, 0.0, 0.5),
    // circle meets diagonals
    Marker::new("G21", Grid, -0.707, -0.707),
    Marker::new("G22", Grid, 0.707, -0.707),
    Marker::new("G23", Grid, 0.707, 0.707),
    Marker::new("G24", Grid, -0.707, 0.707),
    Marker::new("TS1", TriangleSemicircle, -0.866, -0.5),
    Marker::new("TS2", TriangleSemicircle, 0.866, -0.5),
    Marker::new("TS3", TriangleSemicircle, -0.5, 0.5),
    Marker::new("TS4", TriangleSemicircle, 0.5, 0.5),
    Marker::new("TD1", TriangleDiagonal, -0.5, -0.5),
    Marker::new("TD2", TriangleDiagonal, 0.5, -0.5),
    Marker::new("TD3", TriangleDiagonal, 0.0, 0.333),
    Marker::new("TB1", TriangleBisection, 0.0, -0.5),
    Marker::new("TB2", TriangleBisection, -0.5, 0.0),
    Marker::new("TB3", TriangleBisection, 0.5, 0.0),
    // axis points
    Marker::new("PC1", ProjectionCluster, 0.0, 0.5),
    Marker::new("PC2", ProjectionCluster, 0.0, -0.5),
    Marker::new("PC3", ProjectionCluster, 0.5, 0.0),
    Marker::new("PC4", ProjectionCluster, -0.5, 0.0),
    // left clusters
    Marker::new("PC5", ProjectionCluster, -0.6, 0.2),
    Marker::new("PC6", ProjectionCluster, -0.6, -0.2),
    Marker::new("PC7", ProjectionCluster, -0.333, 0.333),
    Marker::new("PC8", ProjectionCluster, -0.333, -0.333),
    Marker::new("PC9", ProjectionCluster, -0.2, 0.6),
    Marker::new("PC10", ProjectionCluster, -0.2, -0.6),
    // right clusters
    Marker::new("PC11", ProjectionCluster, 0.6, 0.2),
    Marker::new("PC12", ProjectionCluster, 0.6, -0.2),
    Marker::new("PC13", ProjectionCluster, 0.333, 0.333),
    Marker::new("PC14", ProjectionCluster, 0.333, -0.333),
    Marker::new("PC15", ProjectionCluster, 0.2, 0.6),
    Marker::new("PC16", ProjectionCluster, 0.2, -0.6),
];

/// All catalogue entries of one family, in table order.
pub fn markers_of(kind: MarkerKind) -> impl Iterator<Item = &'static Marker> {
    MARKERS.iter().filter(move |m| m.kind == kind)
}

/// Positions of all catalogue entries of one family, in table order.
pub fn points_of(kind: MarkerKind) -> Vec<Point2<Real>> {
    markers_of(kind).map(Marker::point).collect()
}

/// Looks up a marker by id.
pub fn marker(id: &str) -> Option<&'static Marker> {
    MARKERS.iter().find(|m| m.id == id)
}
