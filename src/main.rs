// main.rs
//
// Runs the three-face projection experiment with the projection-cluster
// catalogue and the six-face cube assembly, logging what was found.
// Set RUST_LOG=helicon=trace to see every accepted triple.

use helicon::motif::markers::{self, MarkerKind};
use helicon::{CoincidenceResolver, MarkerCategory, Motif, ResolverConfig, Scene};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helicon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let motif = Motif::helicon()?;
    let candidates = markers::points_of(MarkerKind::ProjectionCluster);

    let resolver = CoincidenceResolver::new(ResolverConfig::default());
    let experiment = Scene::projection_experiment(&motif, &candidates, &resolver);

    for candidate in &experiment.coincidences {
        let [p, q, r] = candidate.sources;
        info!(
            point = %candidate.point,
            xy = %p.local,
            yz = %q.local,
            xz = %r.local,
            "triple intersection"
        );
    }
    info!(
        coincidences = experiment.coincidences.len(),
        sources = experiment.markers_in(MarkerCategory::Source).count(),
        lines = experiment.lines.len(),
        "projection experiment"
    );

    let deduped = CoincidenceResolver::new(ResolverConfig::default()).deduplicate(true);
    let unique = Scene::projection_experiment(&Motif::new(), &candidates, &deduped);
    info!(unique = unique.coincidences.len(), "distinct coincidence points");

    let cube = Scene::cube(&motif);
    info!(
        lines = cube.lines.len(),
        markers = cube.markers.len(),
        "cube assembly"
    );

    Ok(())
}
