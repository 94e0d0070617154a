//! Sample table loading.
//!
//! Tables other than the embedded Kartverket set are supplied as JSON:
//!
//! ```json
//! {
//!   "granularity": 50000,
//!   "entries": [
//!     { "easting": 100000, "northing": 6850000, "latitude": 61.574606553, "longitude": 7.455952783 }
//!   ]
//! }
//! ```
//!
//! Every document goes through the same validation as
//! [`SampleTableBuilder::build`](crate::grid::SampleTableBuilder::build).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, Utm33Error};
use crate::grid::{GridPoint, LatLng, SampleTable};
use crate::logging::{log_table_load_stats, log_timed_operation};

/// Serialized form of a sample table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    pub granularity: i64,
    pub entries: Vec<TableEntry>,
}

/// One known conversion in a [`TableDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub easting: i64,
    pub northing: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl TableDocument {
    /// Validate the document into a table
    pub fn into_table(self) -> Result<SampleTable> {
        SampleTable::from_entries(
            self.granularity,
            self.entries.into_iter().map(|e| {
                (
                    GridPoint::new(e.easting, e.northing),
                    LatLng::new(e.latitude, e.longitude),
                )
            }),
        )
    }
}

impl From<&SampleTable> for TableDocument {
    fn from(table: &SampleTable) -> Self {
        Self {
            granularity: table.granularity(),
            entries: table
                .iter()
                .map(|(p, v)| TableEntry {
                    easting: p.easting,
                    northing: p.northing,
                    latitude: v.latitude,
                    longitude: v.longitude,
                })
                .collect(),
        }
    }
}

/// Parse a JSON table.
///
/// When `expected_granularity` is given the document must declare the same
/// spacing, otherwise cell resolution would disagree with the data.
pub fn load_table_str(json: &str, expected_granularity: Option<i64>) -> Result<SampleTable> {
    let document: TableDocument = serde_json::from_str(json)?;
    debug!(
        entries = document.entries.len(),
        granularity = document.granularity,
        "Parsed table document"
    );

    if let Some(expected) = expected_granularity {
        if document.granularity != expected {
            return Err(Utm33Error::Config {
                message: format!(
                    "Table granularity {} does not match configured granularity {}",
                    document.granularity, expected
                ),
            });
        }
    }

    document.into_table()
}

/// Read and parse a JSON table from disk
pub fn load_table_file(path: &Path, expected_granularity: Option<i64>) -> Result<SampleTable> {
    if !path.exists() {
        return Err(Utm33Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    info!("Reading sample table: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    log_timed_operation("table_parse", || {
        load_table_str(&content, expected_granularity)
    })
}

/// Serialize a table to the JSON document format
pub fn table_to_json(table: &SampleTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(&TableDocument::from(table))?)
}

/// Build the table a configuration asks for.
///
/// Uses the embedded Kartverket table unless `table_path` is set.
pub fn load_table(config: &Config) -> Result<SampleTable> {
    config.validate()?;

    let (source, table) = match &config.table_path {
        Some(path) => (
            path.display().to_string(),
            load_table_file(path, Some(config.granularity))?,
        ),
        None => {
            let table = SampleTable::kartverket();
            if table.granularity() != config.granularity {
                return Err(Utm33Error::Config {
                    message: format!(
                        "Embedded table has granularity {}, configuration asks for {}",
                        table.granularity(),
                        config.granularity
                    ),
                });
            }
            ("kartverket".to_string(), table)
        }
    };

    log_table_load_stats(&source, &table);
    Ok(table)
}
