//! # utm33
//!
//! Converts "UTM33" coordinates as used by Kartverket for all of Norway into
//! latitude/longitude.
//!
//! UTM zone 33 was never meant to stretch across the whole country, and UTM
//! software disagrees on how to handle the resulting distortion. Kartverket's
//! own conversion lives in a closed library, so this crate reproduces its
//! results by quadratic interpolation over a table of known conversions
//! sampled every 50 km.
//!
//! ```
//! use utm33::Converter;
//!
//! let converter = Converter::kartverket();
//! let p = converter.convert(146_001.89, 6_851_888.74)?;
//! assert!((p.latitude - 61.636432).abs() < 1e-5);
//! assert!((p.longitude - 8.312486).abs() < 1e-5);
//! # Ok::<(), utm33::Utm33Error>(())
//! ```
//!
//! ## Architecture
//!
//! - **Sample table** ([`grid`], [`kartverket`]): immutable map from grid
//!   anchors to known conversions, built once and shared.
//! - **Interpolation** ([`interpolation`]): cell resolution, 3×3 neighborhood
//!   gather, and two passes of 1D quadratic interpolation.
//! - **Converter** ([`Converter`]): the public conversion surface.
//!
//! Queries too close to the edge of the table fail with
//! [`Utm33Error::IncompleteNeighborhood`] instead of returning a guess.

pub mod config;
pub mod converter;
pub mod data_loader;
pub mod error;
pub mod grid;
pub mod interpolation;
pub mod kartverket;
pub mod logging;

pub use config::Config;
pub use converter::Converter;
pub use error::{Result, Utm33Error};
pub use grid::{GridBounds, GridPoint, LatLng, SampleTable, SampleTableBuilder, GRANULARITY};
pub use interpolation::{convert, Neighborhood};
pub use logging::{init_tracing, log_error, log_table_load_stats, log_timed_operation};
