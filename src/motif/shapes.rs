//! Point sequences for the individual Helicon primitives.
//!
//! Curves are sampled by uniform angular stepping over a closed index range
//! `i ∈ [0, n]`, so a sampled curve always carries `n + 1` points. For the
//! full circle this repeats the start point at the end, which closes the loop.

use crate::errors::MotifError;
use crate::float_types::{CUBE_HALF_EXTENT, PI, Real, TAU};
use nalgebra::Point2;

fn validate(radius: Real, num_points: usize) -> Result<(), MotifError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MotifError::non_positive("radius", radius));
    }
    if num_points < 1 {
        return Err(MotifError::zero_count("num_points"));
    }
    Ok(())
}

/// **Parametric Circle Discretization**
///
/// ```text
/// θᵢ = 2π·i/n,  i ∈ {0, 1, ..., n}
/// pᵢ = c + r·(cos θᵢ, sin θᵢ)
/// ```
///
/// The last sample is snapped onto the first so the loop closes exactly,
/// independent of how `cos(2π)` rounds.
///
/// # Errors
/// [`MotifError::InvalidParameter`] when `radius <= 0` or `num_points == 0`.
pub fn circle_points(
    center: Point2<Real>,
    radius: Real,
    num_points: usize,
) -> Result<Vec<Point2<Real>>, MotifError> {
    validate(radius, num_points)?;
    let mut points: Vec<Point2<Real>> = (0..num_points)
        .map(|i| {
            let theta = TAU * (i as Real) / (num_points as Real);
            Point2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
        })
        .collect();
    // close it
    points.push(points[0]);
    Ok(points)
}

/// Half circle starting at `start_angle` and sweeping π counter-clockwise.
///
/// ```text
/// θᵢ = start + π·i/n,  i ∈ {0, 1, ..., n}
/// ```
///
/// # Errors
/// [`MotifError::InvalidParameter`] when `radius <= 0` or `num_points == 0`.
pub fn semicircle_points(
    center: Point2<Real>,
    radius: Real,
    start_angle: Real,
    num_points: usize,
) -> Result<Vec<Point2<Real>>, MotifError> {
    validate(radius, num_points)?;
    Ok((0..=num_points)
        .map(|i| {
            let theta = start_angle + PI * (i as Real) / (num_points as Real);
            Point2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
        })
        .collect())
}

/// Boundary of `[-1, 1]²`, counter-clockwise from the bottom-left corner,
/// closed explicitly (5 points).
pub fn square_points() -> Vec<Point2<Real>> {
    let h = CUBE_HALF_EXTENT;
    vec![
        Point2::new(-h, -h),
        Point2::new(h, -h),
        Point2::new(h, h),
        Point2::new(-h, h),
        Point2::new(-h, -h), // close explicitly
    ]
}

/// The two corner-to-corner diagonals of the square.
pub fn diagonal_points() -> [Vec<Point2<Real>>; 2] {
    let h = CUBE_HALF_EXTENT;
    [
        vec![Point2::new(-h, -h), Point2::new(h, h)],
        vec![Point2::new(h, -h), Point2::new(-h, h)],
    ]
}

/// Closed triangle on the bottom edge of the square with its apex on the
/// vertical bisector at `apex_y`.
pub fn triangle_points(apex_y: Real) -> Vec<Point2<Real>> {
    let h = CUBE_HALF_EXTENT;
    vec![
        Point2::new(-h, -h),
        Point2::new(h, -h),
        Point2::new(0.0, apex_y),
        Point2::new(-h, -h),
    ]
}

/// Triangle whose apex sits at fraction `ratio` of the square's height,
/// i.e. at `y = 2·ratio - 1` for the unit cube face.
///
/// # Errors
/// [`MotifError::InvalidParameter`] unless `0 < ratio <= 1`.
pub fn harmonic_triangle_points(ratio: Real) -> Result<Vec<Point2<Real>>, MotifError> {
    let position = harmonic_position(ratio)?;
    Ok(triangle_points(position))
}

/// Vertical guide line at `x = 2·ratio - 1`, spanning the full face height.
///
/// # Errors
/// [`MotifError::InvalidParameter`] unless `0 < ratio <= 1`.
pub fn harmonic_line_points(ratio: Real) -> Result<Vec<Point2<Real>>, MotifError> {
    let x = harmonic_position(ratio)?;
    let h = CUBE_HALF_EXTENT;
    Ok(vec![Point2::new(x, -h), Point2::new(x, h)])
}

/// Horizontal counterpart of [`harmonic_line_points`], at `y = 2·ratio - 1`.
///
/// # Errors
/// [`MotifError::InvalidParameter`] unless `0 < ratio <= 1`.
pub fn harmonic_line_points_horizontal(ratio: Real) -> Result<Vec<Point2<Real>>, MotifError> {
    let y = harmonic_position(ratio)?;
    let h = CUBE_HALF_EXTENT;
    Ok(vec![Point2::new(-h, y), Point2::new(h, y)])
}

/// Maps a ratio in `(0, 1]` onto the face coordinate `[-h, h]`.
fn harmonic_position(ratio: Real) -> Result<Real, MotifError> {
    if !(ratio.is_finite() && ratio > 0.0 && ratio <= 1.0) {
        return Err(MotifError::InvalidParameter {
            name: "ratio",
            reason: format!("must lie in (0, 1], got {ratio}"),
        });
    }
    Ok(CUBE_HALF_EXTENT * (2.0 * ratio - 1.0))
}
