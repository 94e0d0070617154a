//! Sample table of known conversions.
//!
//! A [`SampleTable`] maps grid-cell anchors ([`GridPoint`]) to known
//! latitude/longitude pairs. It is built once through [`SampleTableBuilder`]
//! and is read-only afterwards, so it can be shared freely between threads.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::error::{Result, Utm33Error};

/// Spacing in meters between adjacent samples of the Kartverket table.
pub const GRANULARITY: i64 = 50_000;

/// Integer (easting, northing) anchor of one sampled cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    /// Easting in meters
    pub easting: i64,
    /// Northing in meters
    pub northing: i64,
}

impl GridPoint {
    pub const fn new(easting: i64, northing: i64) -> Self {
        Self { easting, northing }
    }

    /// The point `cols` cells east and `rows` cells north of this one.
    ///
    /// Returns `None` when the result does not fit in an `i64`.
    pub fn offset(self, cols: i64, rows: i64, granularity: i64) -> Option<GridPoint> {
        let easting = cols
            .checked_mul(granularity)
            .and_then(|d| self.easting.checked_add(d))?;
        let northing = rows
            .checked_mul(granularity)
            .and_then(|d| self.northing.checked_add(d))?;
        Some(GridPoint { easting, northing })
    }

    /// Whether both coordinates are exact multiples of `granularity`
    pub fn is_aligned(&self, granularity: i64) -> bool {
        self.easting % granularity == 0 && self.northing % granularity == 0
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.easting, self.northing)
    }
}

/// A geographic position in decimal degrees.
///
/// Used both for the stored samples and for conversion results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Extent of the populated grid points (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_easting: i64,
    pub max_easting: i64,
    pub min_northing: i64,
    pub max_northing: i64,
}

/// Immutable lookup from grid anchors to known conversions.
///
/// Coverage is usually not rectangular, so [`SampleTable::lookup`] returning
/// `None` is an ordinary outcome. The granularity travels with the table so
/// that cell resolution always uses the spacing the table was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    granularity: i64,
    entries: BTreeMap<GridPoint, LatLng>,
}

impl SampleTable {
    /// Start building a table with the given spacing in meters
    pub fn builder(granularity: i64) -> SampleTableBuilder {
        SampleTableBuilder::new(granularity)
    }

    /// Build a table from `(GridPoint, LatLng)` pairs in one step
    pub fn from_entries<I>(granularity: i64, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (GridPoint, LatLng)>,
    {
        let mut builder = SampleTableBuilder::new(granularity);
        builder.extend(entries);
        builder.build()
    }

    /// Build from entries known to be aligned and unique, skipping validation.
    pub(crate) fn from_trusted<I>(granularity: i64, entries: I) -> Self
    where
        I: IntoIterator<Item = (GridPoint, LatLng)>,
    {
        Self {
            granularity,
            entries: entries.into_iter().collect(),
        }
    }

    /// Get the known conversion stored for `point`, if any
    pub fn lookup(&self, point: GridPoint) -> Option<LatLng> {
        self.entries.get(&point).copied()
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.entries.contains_key(&point)
    }

    pub fn granularity(&self) -> i64 {
        self.granularity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries, ordered by easting then northing
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Smallest rectangle containing every populated grid point
    pub fn bounds(&self) -> GridBounds {
        let mut points = self.entries.keys();
        // Built tables are never empty.
        let first = points.next().copied().unwrap_or(GridPoint::new(0, 0));
        points.fold(
            GridBounds {
                min_easting: first.easting,
                max_easting: first.easting,
                min_northing: first.northing,
                max_northing: first.northing,
            },
            |b, p| GridBounds {
                min_easting: b.min_easting.min(p.easting),
                max_easting: b.max_easting.max(p.easting),
                min_northing: b.min_northing.min(p.northing),
                max_northing: b.max_northing.max(p.northing),
            },
        )
    }
}

/// Iterator over the entries of a [`SampleTable`]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, GridPoint, LatLng>,
}

impl Iterator for Iter<'_> {
    type Item = (GridPoint, LatLng);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(p, v)| (*p, *v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a SampleTable {
    type Item = (GridPoint, LatLng);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects entries and validates them into a [`SampleTable`].
///
/// Validation is deferred to [`SampleTableBuilder::build`] so entries can be
/// added without handling errors one at a time.
#[derive(Debug, Clone)]
pub struct SampleTableBuilder {
    granularity: i64,
    entries: Vec<(GridPoint, LatLng)>,
}

impl SampleTableBuilder {
    pub fn new(granularity: i64) -> Self {
        Self {
            granularity,
            entries: Vec::new(),
        }
    }

    /// Add one entry
    pub fn insert(&mut self, point: GridPoint, value: LatLng) -> &mut Self {
        self.entries.push((point, value));
        self
    }

    /// Add many entries
    pub fn extend<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (GridPoint, LatLng)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Validate and freeze the table.
    ///
    /// Fails on a non-positive granularity, an empty entry list, a point that
    /// is not a multiple of the granularity, or a point given twice.
    pub fn build(&self) -> Result<SampleTable> {
        if self.granularity <= 0 {
            return Err(Utm33Error::InvalidGranularity {
                granularity: self.granularity,
            });
        }
        if self.entries.is_empty() {
            return Err(Utm33Error::EmptyTable);
        }

        let mut entries = BTreeMap::new();
        for &(point, value) in &self.entries {
            if !point.is_aligned(self.granularity) {
                return Err(Utm33Error::MisalignedGridPoint {
                    point,
                    granularity: self.granularity,
                });
            }
            if entries.insert(point, value).is_some() {
                return Err(Utm33Error::DuplicateGridPoint { point });
            }
        }

        Ok(SampleTable {
            granularity: self.granularity,
            entries,
        })
    }
}
