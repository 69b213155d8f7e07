//! Layout fusion.
//!
//! Merges region-detector output with the table grids recognized for the
//! detected table boxes into one per-page layout. The two detectors are
//! invoked on the same ordered box list, so grids pair with table regions
//! by position; each [`TableGrid`](crate::perception::TableGrid) also
//! carries the box it was recognized for, keeping the pairing explicit.

use crate::error::{Error, Result};
use crate::model::{Figure, Table};
use crate::perception::{DetectedRegion, RegionDetection, TableGrid};

/// Fused layout for one page.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Paragraph regions, awaiting text attachment
    pub paragraphs: Vec<DetectedRegion>,

    /// Tables with their recognized grids
    pub tables: Vec<Table>,

    /// Figure regions
    pub figures: Vec<Figure>,
}

/// Fuse region detection with the recognized table grids.
///
/// Errors with [`Error::DetectionMismatch`] when the grid count differs
/// from the table-box count. Overlapping or doubly-classified regions are
/// passed through untouched: resolving detector artifacts is not this
/// stage's business, and a caller may well want both classifications.
pub fn fuse(regions: RegionDetection, grids: Vec<TableGrid>) -> Result<PageLayout> {
    if grids.len() != regions.tables.len() {
        return Err(Error::DetectionMismatch {
            what: "table grids",
            expected: regions.tables.len(),
            actual: grids.len(),
        });
    }

    let tables = regions
        .tables
        .into_iter()
        .zip(grids)
        .map(|(region, grid)| Table::new(region.box_, region.score, grid.cells))
        .collect();

    let figures = regions
        .figures
        .into_iter()
        .map(|region| Figure::new(region.box_, region.score))
        .collect();

    Ok(PageLayout {
        paragraphs: regions.paragraphs,
        tables,
        figures,
    })
}
