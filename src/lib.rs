//! **Helicon** diagrams on the faces of a cube, and the points where
//! projections launched inward from three orthogonal faces coincide.
//!
//! The pipeline is
//! [`motif`] (2-D primitives) → [`face`] (rigid embedding onto the cube) →
//! [`projection`] (inward segments with provenance) → [`coincidence`]
//! (tolerance-based triple search). [`cube`] replicates a motif on all six
//! faces, and [`scene`] packages the results for a renderer.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for the coincidence search

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod coincidence;
pub mod cube;
pub mod errors;
pub mod face;
pub mod float_types;
pub mod motif;
pub mod projection;
pub mod scene;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use coincidence::{CoincidenceCandidate, CoincidenceResolver, ResolverConfig};
pub use errors::MotifError;
pub use face::{Face, FaceTransform};
pub use motif::{Motif, Primitive, PrimitiveKind, RenderIntent};
pub use projection::{FaceProjection, ProjectedPoint, ProjectionSegment};
pub use scene::{MarkerCategory, Scene};
