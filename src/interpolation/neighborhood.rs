//! The 3×3 block of samples used for one conversion.

use crate::error::{Result, Utm33Error};
use crate::grid::{GridPoint, LatLng, SampleTable};

/// Number of samples along each axis of a neighborhood
pub const NEIGHBORHOOD_SIZE: usize = 3;

/// Samples around an anchor cell, indexed `[row][col]`.
///
/// `[0][0]` is the anchor itself. Sample `[row][col]` belongs to the grid
/// point `col` cells east and `row` cells north of the anchor, so the block
/// extends two cells east and two cells north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    anchor: GridPoint,
    samples: [[LatLng; NEIGHBORHOOD_SIZE]; NEIGHBORHOOD_SIZE],
}

impl Neighborhood {
    /// Gather the block anchored at `anchor` from `table`.
    ///
    /// Fails with [`Utm33Error::IncompleteNeighborhood`] naming the first
    /// missing point in row-major order. Missing samples are never
    /// synthesized.
    pub fn gather(table: &SampleTable, anchor: GridPoint) -> Result<Self> {
        let granularity = table.granularity();
        let mut samples = [[LatLng::new(0.0, 0.0); NEIGHBORHOOD_SIZE]; NEIGHBORHOOD_SIZE];

        for (row, cells) in samples.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let (dc, dr) = (col as i64, row as i64);
                // An unrepresentable point cannot be in the table either.
                let missing = || Utm33Error::IncompleteNeighborhood {
                    anchor,
                    missing: GridPoint::new(
                        anchor.easting.saturating_add(dc.saturating_mul(granularity)),
                        anchor.northing.saturating_add(dr.saturating_mul(granularity)),
                    ),
                };
                let point = anchor.offset(dc, dr, granularity).ok_or_else(missing)?;
                *cell = table.lookup(point).ok_or_else(missing)?;
            }
        }

        Ok(Self { anchor, samples })
    }

    /// Assemble a neighborhood from samples that are already at hand
    pub fn from_samples(
        anchor: GridPoint,
        samples: [[LatLng; NEIGHBORHOOD_SIZE]; NEIGHBORHOOD_SIZE],
    ) -> Self {
        Self { anchor, samples }
    }

    pub fn anchor(&self) -> GridPoint {
        self.anchor
    }

    /// Sample at `row` cells north and `col` cells east of the anchor
    pub fn get(&self, row: usize, col: usize) -> Option<LatLng> {
        self.samples.get(row).and_then(|r| r.get(col)).copied()
    }

    /// All rows, southernmost first
    pub fn rows(&self) -> [[LatLng; NEIGHBORHOOD_SIZE]; NEIGHBORHOOD_SIZE] {
        self.samples
    }
}
