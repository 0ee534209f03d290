mod support;

use helicon::{
    CoincidenceResolver, ResolverConfig,
    coincidence::{CoincidenceSearch, dedup_by_rounding},
    float_types::{CUBE_HALF_EXTENT, EPSILON, Real},
};
use nalgebra::{Point2, Point3};

use crate::support::{approx_eq, candidate_keys, cluster_projections, projections_of};

fn resolver(tolerance: Real) -> CoincidenceResolver {
    CoincidenceResolver::new(ResolverConfig {
        tolerance,
        ..ResolverConfig::default()
    })
}

#[test]
fn single_triple_meets_at_cube_interior_point() {
    let found = resolver(0.01).resolve_points(
        &[Point3::new(0.5, 0.5, 1.0)],
        &[Point3::new(1.0, 0.5, 0.5)],
        &[Point3::new(0.5, 1.0, 0.5)],
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].point, Point3::new(0.5, 0.5, 0.5));
    assert_eq!(found[0].source_indices(), [0, 0, 0]);
}

#[test]
fn composite_outside_cube_is_rejected() {
    // Shared coordinates agree, but x = 1.5 lies outside the cube.
    let found = resolver(0.01).resolve_points(
        &[Point3::new(1.5, 0.5, 1.0)],
        &[Point3::new(1.0, 0.5, 0.5)],
        &[Point3::new(1.5, 1.0, 0.5)],
    );
    assert!(found.is_empty());

    let found = resolver(0.01).resolve_points(
        &[Point3::new(0.5, -1.2, 1.0)],
        &[Point3::new(1.0, -1.2, 0.5)],
        &[Point3::new(0.5, 1.0, 0.5)],
    );
    assert!(found.is_empty());
}

#[test]
fn composite_on_cube_boundary_is_accepted() {
    // (1, -1, 0.5) sits on an edge of the cube; the bounds are inclusive
    let found = resolver(0.01).resolve_points(
        &[Point3::new(1.0, -1.0, 1.0)],
        &[Point3::new(1.0, -1.0, 0.5)],
        &[Point3::new(1.0, 1.0, 0.5)],
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].point, Point3::new(CUBE_HALF_EXTENT, -CUBE_HALF_EXTENT, 0.5));

    // a corner, every coordinate at the extent
    let corner = Point2::new(-1.0, -1.0);
    let [xy, yz, xz] = projections_of(&[corner]);
    let found = resolver(0.01).resolve(&xy, &yz, &xz);
    assert_eq!(found.len(), 1);
    assert!(found[0].point.coords.iter().all(|v| v.abs() == CUBE_HALF_EXTENT));
}

#[test]
fn empty_input_yields_empty_result() {
    let r = resolver(0.01);
    let some = [Point3::new(0.5, 0.5, 1.0)];
    assert!(r.resolve_points(&[], &some, &some).is_empty());
    assert!(r.resolve_points(&some, &[], &some).is_empty());
    assert!(r.resolve_points(&some, &some, &[]).is_empty());
}

#[test]
fn cluster_catalogue_coincidences() {
    let [xy, yz, xz] = cluster_projections();
    let found = resolver(0.01).resolve(&xy, &yz, &xz);
    assert_eq!(found.len(), 8);

    for c in &found {
        assert!(c.point.coords.iter().all(|v| v.abs() <= CUBE_HALF_EXTENT));
        assert!(c.deviations().iter().all(|d| *d <= 0.01));
        // every coordinate is ±0.333: the diagonal cluster points meet each other
        assert!(c.point.coords.iter().all(|v| approx_eq(v.abs(), 0.333, EPSILON)));

        // provenance points back at the contributing candidate
        assert_eq!(xy.points[c.xy().source], *c.xy());
        assert_eq!(yz.points[c.yz().source], *c.yz());
        assert_eq!(xz.points[c.xz().source], *c.xz());
    }
}

#[test]
fn rerunning_is_idempotent() {
    let [xy, yz, xz] = cluster_projections();
    let r = resolver(0.01);
    let first = candidate_keys(&r.resolve(&xy, &yz, &xz));
    let second = candidate_keys(&r.resolve(&xy, &yz, &xz));
    assert_eq!(first, second);

    // reversing the inputs changes only the order of the output
    let rev = |p: &helicon::FaceProjection| {
        let mut p = p.clone();
        p.points.reverse();
        p
    };
    let reversed = candidate_keys(&r.resolve(&rev(&xy), &rev(&yz), &rev(&xz)));
    assert_eq!(first, reversed);
}

#[test]
fn duplicates_are_reported_unless_deduplicated() {
    let candidates = [Point2::new(0.5, 0.5), Point2::new(0.5, 0.5)];
    let [xy, yz, xz] = projections_of(&candidates);

    let all = resolver(0.01).resolve(&xy, &yz, &xz);
    assert_eq!(all.len(), 8);
    assert!(all.iter().all(|c| c.point == Point3::new(0.5, 0.5, 0.5)));

    let unique = resolver(0.01).deduplicate(true).resolve(&xy, &yz, &xz);
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].source_indices(), [0, 0, 0]);

    assert_eq!(dedup_by_rounding(all, 6), unique);
}

#[test]
fn tolerance_widens_matches() {
    let candidates = [Point2::new(0.5, 0.5), Point2::new(0.52, 0.52)];
    let [xy, yz, xz] = projections_of(&candidates);
    assert_eq!(resolver(0.01).resolve(&xy, &yz, &xz).len(), 2);
    assert_eq!(resolver(0.05).resolve(&xy, &yz, &xz).len(), 8);
}

#[test]
fn custom_search_strategy_is_used() {
    struct Nothing;
    impl CoincidenceSearch for Nothing {
        fn search(
            &self,
            _: &[helicon::ProjectedPoint],
            _: &[helicon::ProjectedPoint],
            _: &[helicon::ProjectedPoint],
            _: Real,
        ) -> Vec<helicon::CoincidenceCandidate> {
            Vec::new()
        }
    }

    let [xy, yz, xz] = cluster_projections();
    let r = CoincidenceResolver::with_search(ResolverConfig::default(), Nothing);
    assert!(r.resolve(&xy, &yz, &xz).is_empty());
}
