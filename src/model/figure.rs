//! Figure types.

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// A figure region. Geometry only: the cropped image is produced at
/// export time from the source page image rather than stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Bounding box in pixel coordinates
    #[serde(rename = "box")]
    pub box_: BoundingBox,

    /// Detection confidence (0..1)
    pub score: f32,
}

impl Figure {
    /// Create a new figure region.
    pub fn new(box_: BoundingBox, score: f32) -> Self {
        Self { box_, score }
    }
}
