//! Quadratic interpolation.
//!
//! Fits the unique parabola through three equally spaced samples and
//! evaluates it anywhere on the real line. In two dimensions the rows of a
//! [`Neighborhood`] are interpolated first (along easting) and the three
//! results are then interpolated along northing.

use super::neighborhood::Neighborhood;
use crate::grid::LatLng;

/// Evaluate the parabola through `(0, f0)`, `(1, f1)` and `(2, f2)` at `x`.
///
/// Any `x` is accepted; values outside `[0, 2]` extrapolate.
#[inline]
pub fn quadratic(f0: f64, f1: f64, f2: f64, x: f64) -> f64 {
    let a = (f2 + f0) / 2.0 - f1;
    let b = f1 - f0 - a;
    a * x * x + b * x + f0
}

/// [`quadratic`] applied to latitude and longitude independently
#[inline]
pub fn quadratic_latlng(f0: LatLng, f1: LatLng, f2: LatLng, x: f64) -> LatLng {
    LatLng::new(
        quadratic(f0.latitude, f1.latitude, f2.latitude, x),
        quadratic(f0.longitude, f1.longitude, f2.longitude, x),
    )
}

/// Interpolate a neighborhood at normalized offsets `x` (east) and `y` (north)
/// from its anchor.
pub fn biquadratic(neighborhood: &Neighborhood, x: f64, y: f64) -> LatLng {
    let [r0, r1, r2] = neighborhood.rows().map(|[c0, c1, c2]| quadratic_latlng(c0, c1, c2, x));
    quadratic_latlng(r0, r1, r2, y)
}
