//! The conversion entry point.
//!
//! A [`Converter`] owns a shared, immutable [`SampleTable`]. It holds no
//! other state, so one instance can serve any number of threads at once.

use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::Config;
use crate::data_loader::load_table;
use crate::error::Result;
use crate::grid::{LatLng, SampleTable};
use crate::interpolation::{self, Neighborhood};

/// Converts UTM33 easting/northing to latitude/longitude
#[derive(Debug, Clone)]
pub struct Converter {
    table: Arc<SampleTable>,
}

impl Converter {
    pub fn new(table: SampleTable) -> Self {
        Self::from_shared(Arc::new(table))
    }

    /// Use a table that is already shared elsewhere
    pub fn from_shared(table: Arc<SampleTable>) -> Self {
        Self { table }
    }

    /// Converter over the embedded Kartverket table
    pub fn kartverket() -> Self {
        Self::new(SampleTable::kartverket())
    }

    /// Converter over the table a configuration selects
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(load_table(config)?))
    }

    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    /// Convert `(easting, northing)` in meters to degrees.
    ///
    /// Fails with
    /// [`IncompleteNeighborhood`](crate::Utm33Error::IncompleteNeighborhood)
    /// when the table lacks one of the nine samples around the query, and with
    /// [`InvalidCoordinates`](crate::Utm33Error::InvalidCoordinates) for NaN
    /// or infinite input.
    pub fn convert(&self, easting: f64, northing: f64) -> Result<LatLng> {
        match interpolation::convert(&self.table, easting, northing) {
            Ok(result) => {
                trace!(
                    easting,
                    northing,
                    latitude = result.latitude,
                    longitude = result.longitude,
                    "Converted"
                );
                Ok(result)
            }
            Err(e) => {
                debug!(easting, northing, error = %e, "Conversion failed");
                Err(e)
            }
        }
    }

    /// Convert many points; each result is independent of the others
    pub fn convert_many<I>(&self, points: I) -> Vec<Result<LatLng>>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points
            .into_iter()
            .map(|(easting, northing)| self.convert(easting, northing))
            .collect()
    }

    /// The samples a conversion at `(easting, northing)` would use
    pub fn neighborhood(&self, easting: f64, northing: f64) -> Result<Neighborhood> {
        interpolation::gather_for(&self.table, easting, northing)
    }

    /// Whether [`Converter::convert`] succeeds for this point
    pub fn covers(&self, easting: f64, northing: f64) -> bool {
        self.neighborhood(easting, northing).is_ok()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::kartverket()
    }
}
