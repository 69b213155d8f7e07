//! Table types.

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// A table region with its recognized cell grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Bounding box in pixel coordinates
    #[serde(rename = "box")]
    pub box_: BoundingBox,

    /// Detection confidence (0..1)
    pub score: f32,

    /// Cells in row-major order: all cells of row `r` precede row `r+1`,
    /// and within a row columns ascend. The HTML serializer relies on
    /// this order to close rows.
    pub cells: Vec<TableCell>,
}

impl Table {
    /// Create a table, normalizing the cells to row-major order.
    pub fn new(box_: BoundingBox, score: f32, mut cells: Vec<TableCell>) -> Self {
        cells.sort_by_key(|c| (c.row, c.col));
        Self { box_, score, cells }
    }

    /// Number of rows the grid declares (maximum of `row + row_span - 1`).
    pub fn row_count(&self) -> u32 {
        self.cells
            .iter()
            .map(|c| (c.row + c.row_span).saturating_sub(1))
            .max()
            .unwrap_or(0)
    }

    /// Number of columns the grid declares (maximum of `col + col_span - 1`).
    pub fn col_count(&self) -> u32 {
        self.cells
            .iter()
            .map(|c| (c.col + c.col_span).saturating_sub(1))
            .max()
            .unwrap_or(0)
    }

    /// Check if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A single table cell.
///
/// `row` and `col` are 1-based grid origins; spans are at least 1. The
/// grid is taken as the recognizer declared it: overlapping spans are not
/// validated here and must not crash a serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// 1-based row of the cell origin
    pub row: u32,

    /// 1-based column of the cell origin
    pub col: u32,

    /// Number of rows the cell spans
    pub row_span: u32,

    /// Number of columns the cell spans
    pub col_span: u32,

    /// Recognized cell text, or `None` for an empty cell
    pub contents: Option<String>,

    /// Cell bounding box in pixel coordinates
    #[serde(rename = "box")]
    pub box_: BoundingBox,
}

impl TableCell {
    /// Create a 1x1 cell at the given grid position.
    pub fn new(row: u32, col: u32, contents: Option<String>, box_: BoundingBox) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
            contents,
            box_,
        }
    }

    /// Set the row span and return self.
    pub fn with_row_span(mut self, span: u32) -> Self {
        self.row_span = span;
        self
    }

    /// Set the column span and return self.
    pub fn with_col_span(mut self, span: u32) -> Self {
        self.col_span = span;
        self
    }
}
