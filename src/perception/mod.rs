//! Perception collaborator boundary.
//!
//! The detection and recognition models are external to this crate. They
//! are reached through the traits below and treated as black boxes that,
//! given an image, return geometric detections and decoded token output.
//! Each call may be slow and is never retried here; retry policy belongs
//! to the caller.
//!
//! All value types are serializable so a recorded [`PageObservation`] can
//! be replayed through the reconstruction pipeline without any model
//! present (see `DocumentAnalyzer::reconstruct_page`).

mod shared;

pub use shared::Collaborator;

use std::path::Path;

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{BoundingBox, Quad};
use crate::model::TableCell;

/// A detected region box with its confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedRegion {
    /// Region bounding box
    #[serde(rename = "box")]
    pub box_: BoundingBox,

    /// Detection confidence (0..1)
    pub score: f32,
}

impl DetectedRegion {
    /// Create a new detected region.
    pub fn new(box_: BoundingBox, score: f32) -> Self {
        Self { box_, score }
    }
}

/// Region-detector output for one page: paragraph, table, and figure
/// boxes, each list in model output order.
///
/// No deduplication is applied anywhere downstream: a box the detector
/// classified as both a figure and a paragraph arrives as two regions and
/// leaves as two regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionDetection {
    /// Paragraph boxes
    pub paragraphs: Vec<DetectedRegion>,

    /// Table boxes
    pub tables: Vec<DetectedRegion>,

    /// Figure boxes
    pub figures: Vec<DetectedRegion>,
}

/// Table-grid recognizer output for one table box: the box it was invoked
/// on together with its recognized cells.
///
/// Returning the box alongside the cells keeps the pairing explicit
/// instead of relying on two parallel arrays staying index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableGrid {
    /// The table box this grid was recognized for
    #[serde(rename = "box")]
    pub box_: BoundingBox,

    /// Recognized cells
    pub cells: Vec<TableCell>,
}

/// Raw text-recognizer output for one region: decoded tokens, an overall
/// confidence, and the target quadrilateral the region was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTextLine {
    /// Decoded tokens, in reading order; empty when nothing was read
    pub tokens: Vec<String>,

    /// Recognition confidence (0..1)
    pub score: f32,

    /// The quadrilateral the tokens were read from
    pub quad: Quad,
}

/// Everything the perception models reported for one page. The input to
/// the pure reconstruction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageObservation {
    /// Region-detector output
    pub regions: RegionDetection,

    /// One table grid per entry in `regions.tables`, same order
    pub grids: Vec<TableGrid>,

    /// One text line per entry in `regions.paragraphs`, same order
    pub lines: Vec<RawTextLine>,
}

/// Detects paragraph, table, and figure regions on a page image.
pub trait RegionDetector {
    /// Run region detection on one page image.
    fn detect(&self, image: &RgbImage) -> Result<RegionDetection>;
}

/// Recognizes the cell grid of each table box on a page image.
pub trait TableStructureRecognizer {
    /// Recognize one grid per input box, returned in input order with the
    /// box it belongs to.
    fn recognize(&self, image: &RgbImage, boxes: &[BoundingBox]) -> Result<Vec<TableGrid>>;
}

/// Reads the text inside each quadrilateral on a page image.
pub trait TextRecognizer {
    /// Recognize one raw line per input quad, index-aligned with the input.
    fn recognize(&self, image: &RgbImage, quads: &[Quad]) -> Result<Vec<RawTextLine>>;
}

/// Loads the page images of a source file.
///
/// Dispatch between single-image and multi-page formats (by extension or
/// otherwise) is the implementor's business; the reconstruction core only
/// sees the resulting image sequence.
pub trait PageSource {
    /// Load all page images of the file at `path`, in page order.
    fn load(&self, path: &Path) -> Result<Vec<RgbImage>>;
}
