//! Logging utilities for utm33.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding process, which can use [`init_tracing`] for a sensible
//! default.

use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::error::{Result, Utm33Error};
use crate::grid::SampleTable;

/// Initialize a global fmt subscriber at the given level.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`. Fails with a
/// configuration error if a global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| Utm33Error::Config {
            message: format!("Failed to initialize tracing: {}", e),
        })
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    debug!(operation = operation, "Starting operation");

    let result = f();

    info!(
        operation = operation,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log summary information about a freshly built sample table
pub fn log_table_load_stats(source: &str, table: &SampleTable) {
    let bounds = table.bounds();
    info!(
        operation = "table_load",
        source = source,
        entries = table.len(),
        granularity = table.granularity(),
        min_easting = bounds.min_easting,
        max_easting = bounds.max_easting,
        min_northing = bounds.min_northing,
        max_northing = bounds.max_northing,
        "Sample table loaded"
    );
}

/// Log an error with context
pub fn log_error(error: &Utm33Error, context: &str) {
    error!(
        error = %error,
        context = context,
        coverage_miss = error.is_coverage_miss(),
        "Error occurred"
    );
}
