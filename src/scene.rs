//! Hand-off to a renderer: line loops and categorised marker points.
//!
//! Nothing here draws. A [`Scene`] is plain data that a viewer can walk.

use crate::coincidence::{CoincidenceCandidate, CoincidenceResolver, CoincidenceSearch};
use crate::cube::{EmbeddedMotif, EmbeddedPrimitive, assemble_on, cube_edges};
use crate::face::Face;
use crate::float_types::{PROJECTION_DEPTH, Real};
use crate::motif::{Motif, RenderIntent};
use crate::projection::FaceProjection;
use hashbrown::HashSet;
use nalgebra::{Point2, Point3};
use tracing::debug;

/// Semantic category of a marker, for the renderer's colour choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    Regular,
    Coincidence,
    Source,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneMarker {
    pub position: Point3<Real>,
    pub category: MarkerCategory,
    pub label: String,
}

/// A polyline; `closed` means the last point repeats the first.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLoop {
    pub label: String,
    pub face: Option<Face>,
    pub points: Vec<Point3<Real>>,
    pub closed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub lines: Vec<LineLoop>,
    pub markers: Vec<SceneMarker>,
    pub coincidences: Vec<CoincidenceCandidate>,
}

impl Scene {
    fn push_primitive(&mut self, primitive: &EmbeddedPrimitive) {
        match primitive.intent {
            RenderIntent::Points => {
                self.markers.extend(primitive.points.iter().map(|p| SceneMarker {
                    position: *p,
                    category: MarkerCategory::Regular,
                    label: format!("{}:{}", primitive.face, primitive.label),
                }));
            },
            intent => self.lines.push(LineLoop {
                label: format!("{}:{}", primitive.face, primitive.label),
                face: Some(primitive.face),
                points: primitive.points.clone(),
                closed: intent.is_closed(),
            }),
        }
    }

    fn push_motif(&mut self, embedded: &EmbeddedMotif) {
        for primitive in &embedded.primitives {
            self.push_primitive(primitive);
        }
    }

    /// The motif on all six faces plus the cube's wireframe.
    pub fn cube(motif: &Motif) -> Self {
        let mut scene = Scene::default();
        for embedded in assemble_on(motif, &Face::CUBE) {
            scene.push_motif(&embedded);
        }
        scene
            .lines
            .extend(cube_edges().into_iter().enumerate().map(|(i, [a, b])| LineLoop {
                label: format!("cube-edge-{i}"),
                face: None,
                points: vec![a, b],
                closed: false,
            }));
        scene
    }

    /// The three-face projection experiment.
    ///
    /// `motif` is drawn on the `xy`, `yz` and `xz` faces, every point of
    /// `candidates` is launched inward from each of those faces, and the
    /// resolver's coincidences are added as markers. A candidate that
    /// contributed to at least one coincidence is marked as a `Source`.
    pub fn projection_experiment<S: CoincidenceSearch>(
        motif: &Motif,
        candidates: &[Point2<Real>],
        resolver: &CoincidenceResolver<S>,
    ) -> Self {
        let mut scene = Scene::default();
        for embedded in assemble_on(motif, &Face::ORTHOGONAL) {
            scene.push_motif(&embedded);
        }

        let [xy, yz, xz] = Face::ORTHOGONAL.map(|face| FaceProjection::new(face, candidates));
        let coincidences = resolver.resolve(&xy, &yz, &xz);

        let sources: HashSet<(Face, usize)> = coincidences
            .iter()
            .flat_map(|c| c.sources.iter().map(|s| (s.face, s.source)))
            .collect();
        debug!(
            coincidences = coincidences.len(),
            sources = sources.len(),
            "projection experiment resolved"
        );

        for projection in [&xy, &yz, &xz] {
            for segment in projection.segments(PROJECTION_DEPTH) {
                let start = segment.start;
                scene.lines.push(LineLoop {
                    label: format!("{}:projection-{}", start.face, start.source),
                    face: Some(start.face),
                    points: vec![start.position, segment.end],
                    closed: false,
                });
                let category = if sources.contains(&(start.face, start.source)) {
                    MarkerCategory::Source
                } else {
                    MarkerCategory::Regular
                };
                scene.markers.push(SceneMarker {
                    position: start.position,
                    category,
                    label: format!("{}:candidate-{}", start.face, start.source),
                });
            }
        }

        scene
            .markers
            .extend(coincidences.iter().enumerate().map(|(i, c)| SceneMarker {
                position: c.point,
                category: MarkerCategory::Coincidence,
                label: format!("coincidence-{i}"),
            }));
        scene.coincidences = coincidences;
        scene
    }

    pub fn markers_in(&self, category: MarkerCategory) -> impl Iterator<Item = &SceneMarker> {
        self.markers.iter().filter(move |m| m.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coincidence::ResolverConfig;

    #[test]
    fn cube_scene_has_wireframe_and_six_squares() {
        let scene = Scene::cube(&Motif::square_only());
        assert_eq!(scene.lines.len(), 6 + 12);
        assert!(scene.markers.is_empty());
        assert_eq!(scene.lines.iter().filter(|l| l.closed).count(), 6);
    }

    #[test]
    fn experiment_marks_sources_and_coincidences() {
        let candidates = [Point2::new(0.5, 0.5), Point2::new(0.9, -0.1)];
        let resolver = CoincidenceResolver::new(ResolverConfig {
            tolerance: 0.01,
            ..ResolverConfig::default()
        });
        let scene = Scene::projection_experiment(&Motif::new(), &candidates, &resolver);

        // (0.5, 0.5) on every face meets at (0.5, 0.5, 0.5)
        assert_eq!(scene.coincidences.len(), 1);
        assert_eq!(scene.coincidences[0].point, Point3::new(0.5, 0.5, 0.5));
        assert_eq!(scene.markers_in(MarkerCategory::Coincidence).count(), 1);
        assert_eq!(scene.markers_in(MarkerCategory::Source).count(), 3);
        assert_eq!(scene.markers_in(MarkerCategory::Regular).count(), 3);
        assert_eq!(scene.lines.len(), 6);
    }
}
