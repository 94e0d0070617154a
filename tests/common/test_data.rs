//! Test data generation utilities.
//!
//! Builds synthetic sample tables from known functions so interpolation
//! results can be checked against exact values.

use utm33::{GridPoint, LatLng, SampleTable};

/// Build a rectangular table with `cols` × `rows` samples starting at `origin`,
/// where each sample is `f(easting, northing)`.
pub fn table_from_fn<F>(
    granularity: i64,
    origin: GridPoint,
    cols: i64,
    rows: i64,
    f: F,
) -> SampleTable
where
    F: Fn(f64, f64) -> LatLng,
{
    let mut builder = SampleTable::builder(granularity);
    for col in 0..cols {
        for row in 0..rows {
            let p = GridPoint::new(
                origin.easting + col * granularity,
                origin.northing + row * granularity,
            );
            builder.insert(p, f(p.easting as f64, p.northing as f64));
        }
    }
    builder.build().expect("synthetic table is valid")
}

/// A surface that is quadratic in each coordinate, which biquadratic
/// interpolation reproduces up to rounding.
pub fn quadratic_surface(easting: f64, northing: f64) -> LatLng {
    let (x, y) = (easting / 1000.0, northing / 1000.0);
    LatLng::new(
        60.0 + 0.01 * y + 0.0001 * x * y - 0.00002 * y * y,
        10.0 + 0.02 * x - 0.00003 * x * x + 0.000001 * x * x * y * y,
    )
}
