//! Assertion utilities for testing.
//!
//! Floating-point comparisons for coordinates.

use utm33::LatLng;

/// Default epsilon for coordinate comparisons, in degrees
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that latitude and longitude are each within `epsilon` of the expected position.
pub fn assert_latlng_approx_eq(actual: LatLng, expected: LatLng, epsilon: Option<f64>) {
    assert_approx_eq(actual.latitude, expected.latitude, epsilon);
    assert_approx_eq(actual.longitude, expected.longitude, epsilon);
}

/// Assert that two positions are bit-for-bit identical.
pub fn assert_bit_identical(actual: LatLng, expected: LatLng) {
    assert_eq!(
        (actual.latitude.to_bits(), actual.longitude.to_bits()),
        (expected.latitude.to_bits(), expected.longitude.to_bits()),
        "Positions differ: actual = {:?}, expected = {:?}",
        actual,
        expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0 + 1e-10, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    #[should_panic(expected = "Values not approximately equal")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, None);
    }
}
