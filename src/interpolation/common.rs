//! Common utilities for interpolation.
//!
//! Cell resolution maps an arbitrary query onto the anchor of the cell that
//! selects its neighborhood.

use crate::grid::GridPoint;

/// Resolve the anchor cell for a query.
///
/// Each coordinate is cast to an integer (truncating toward zero) and then
/// integer-divided by the granularity (again truncating toward zero). This
/// is required behavior, not an implementation detail: it decides which
/// neighborhood is used, and flooring would pick a different cell for
/// negative coordinates. An easting of -30 000 resolves to 0, not -50 000.
///
/// `granularity` must be positive. Non-finite inputs saturate like any
/// float-to-integer cast (NaN becomes 0).
pub fn resolve_cell(easting: f64, northing: f64, granularity: i64) -> GridPoint {
    GridPoint::new(
        truncate_to_cell(easting, granularity),
        truncate_to_cell(northing, granularity),
    )
}

fn truncate_to_cell(coord: f64, granularity: i64) -> i64 {
    (coord as i64) / granularity * granularity
}

/// Offset of `coord` from `anchor`, in units of cells
pub fn normalized_offset(coord: f64, anchor: i64, granularity: i64) -> f64 {
    (coord - anchor as f64) / granularity as f64
}
