// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Default ε for cross-face coordinate agreement.
pub const DEFAULT_COINCIDENCE_TOLERANCE: Real = 0.01;

/// Most decimal places a dedup key can resolve before rounding stops
/// distinguishing values in `[-1, 1]`.
#[cfg(feature = "f32")]
pub const MAX_DEDUP_PRECISION: u32 = 6;
/// Most decimal places a dedup key can resolve before rounding stops
/// distinguishing values in `[-1, 1]`.
#[cfg(feature = "f64")]
pub const MAX_DEDUP_PRECISION: u32 = 15;

/// Geometric epsilon for "same point" comparisons inside a face.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Geometric epsilon for "same point" comparisons inside a face.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Motif constants
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Half-extent of the cube; every face plane sits at ±this value.
pub const CUBE_HALF_EXTENT: Real = 1.0;
/// Samples used for the inscribed circle.
pub const CIRCLE_SEGMENTS: usize = 50;
/// Samples used for each edge semicircle.
pub const SEMICIRCLE_SEGMENTS: usize = 25;
/// Length of a projection segment: one full cube width.
pub const PROJECTION_DEPTH: Real = 2.0 * CUBE_HALF_EXTENT;
/// The harmonic ratios 1/2, 1/3, 1/4, 1/5.
pub const HARMONIC_RATIOS: [Real; 4] = [1.0 / 2.0, 1.0 / 3.0, 1.0 / 4.0, 1.0 / 5.0];
