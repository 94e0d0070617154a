//! Interpolation over the sample table.
//!
//! A query is resolved to an anchor cell ([`common::resolve_cell`]), the
//! 3×3 block of samples east and north of that anchor is gathered
//! ([`Neighborhood::gather`]), and the block is evaluated with two passes of
//! 1D quadratic interpolation ([`quadratic::biquadratic`]).
//!
//! If any of the nine samples is missing the conversion fails; there is no
//! lower-order fallback.

pub mod common;
pub mod neighborhood;
pub mod quadratic;

pub use common::{normalized_offset, resolve_cell};
pub use neighborhood::{Neighborhood, NEIGHBORHOOD_SIZE};
pub use quadratic::{biquadratic, quadratic, quadratic_latlng};

use crate::error::{Result, Utm33Error};
use crate::grid::{LatLng, SampleTable};

/// Convert `(easting, northing)` using `table`.
///
/// This is the whole algorithm as a pure function; [`crate::Converter`]
/// wraps it with shared ownership and logging.
pub fn convert(table: &SampleTable, easting: f64, northing: f64) -> Result<LatLng> {
    let granularity = table.granularity();
    let neighborhood = gather_for(table, easting, northing)?;
    let anchor = neighborhood.anchor();
    Ok(biquadratic(
        &neighborhood,
        normalized_offset(easting, anchor.easting, granularity),
        normalized_offset(northing, anchor.northing, granularity),
    ))
}

/// Gather the neighborhood a query resolves to.
///
/// Non-finite coordinates are rejected before cell resolution, since the
/// saturating cast would otherwise map them onto real cells.
pub fn gather_for(table: &SampleTable, easting: f64, northing: f64) -> Result<Neighborhood> {
    if !easting.is_finite() || !northing.is_finite() {
        return Err(Utm33Error::InvalidCoordinates { easting, northing });
    }
    let anchor = resolve_cell(easting, northing, table.granularity());
    Neighborhood::gather(table, anchor)
}
