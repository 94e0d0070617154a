//! Error types for utm33.
//!
//! A single enum covers every failure the crate can report. Conversions
//! themselves only ever fail with [`Utm33Error::IncompleteNeighborhood`];
//! the remaining variants come from building tables and loading configuration.

use thiserror::Error;

use crate::grid::GridPoint;

/// The main error type for utm33 operations.
#[derive(Error, Debug)]
pub enum Utm33Error {
    /// One of the nine samples needed around the anchor cell is not in the table.
    #[error("Incomplete neighborhood around {anchor}: no sample at {missing}")]
    IncompleteNeighborhood { anchor: GridPoint, missing: GridPoint },

    /// Easting or northing is NaN or infinite
    #[error("Invalid coordinates: easting {easting}, northing {northing}")]
    InvalidCoordinates { easting: f64, northing: f64 },

    /// The same grid point was supplied twice while building a table
    #[error("Duplicate grid point: {point}")]
    DuplicateGridPoint { point: GridPoint },

    /// A grid point is not an exact multiple of the table granularity
    #[error("Grid point {point} is not aligned to granularity {granularity}")]
    MisalignedGridPoint { point: GridPoint, granularity: i64 },

    /// Granularity must be strictly positive
    #[error("Invalid granularity: {granularity}")]
    InvalidGranularity { granularity: i64 },

    /// A table needs at least one entry
    #[error("Sample table has no entries")]
    EmptyTable,

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Utm33Error {
    /// Whether this error means the query fell outside the table's coverage.
    ///
    /// Callers decide whether that is acceptable or a data bug; every other
    /// variant points at bad input data or configuration.
    pub fn is_coverage_miss(&self) -> bool {
        matches!(self, Utm33Error::IncompleteNeighborhood { .. })
    }
}

/// Convenience type alias for Results with Utm33Error
pub type Result<T> = std::result::Result<T, Utm33Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_neighborhood_message() {
        let err = Utm33Error::IncompleteNeighborhood {
            anchor: GridPoint::new(1_200_000, 7_950_000),
            missing: GridPoint::new(1_250_000, 7_950_000),
        };
        assert_eq!(
            err.to_string(),
            "Incomplete neighborhood around (1200000, 7950000): no sample at (1250000, 7950000)"
        );
        assert!(err.is_coverage_miss());
    }

    #[test]
    fn test_build_errors_are_not_coverage_misses() {
        let err = Utm33Error::DuplicateGridPoint {
            point: GridPoint::new(0, 0),
        };
        assert!(!err.is_coverage_miss());
        assert!(!Utm33Error::EmptyTable.is_coverage_miss());
    }
}
