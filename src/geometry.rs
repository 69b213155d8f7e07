//! Geometry primitives for detected regions.
//!
//! All coordinates are pixel-space. Boxes are axis-aligned rectangles
//! `(x1, y1, x2, y2)`; text lines are four-point polygons ordered
//! clockwise from the top-left corner.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,

    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Orientation of a text line, derived from its quadrilateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right text
    Horizontal,
    /// Top-to-bottom text
    Vertical,
}

impl std::fmt::Display for TextDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextDirection::Horizontal => write!(f, "horizontal"),
            TextDirection::Vertical => write!(f, "vertical"),
        }
    }
}

/// An axis-aligned bounding box `(x1, y1, x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
    /// Right edge
    pub x2: f32,
    /// Bottom edge
    pub y2: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box width.
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Box height.
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Minimum y-coordinate. The sole reading-order sort key: elements at
    /// the same height in different columns keep their detector order.
    pub fn top(&self) -> f32 {
        self.y1
    }

    /// Whether `other` lies entirely inside this box.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.x1 <= other.x1 && self.y1 <= other.y1 && self.x2 >= other.x2 && self.y2 >= other.y2
    }
}

/// A four-point text-line polygon, clockwise from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// Corner points, clockwise from top-left
    pub points: [Point; 4],
}

impl Quad {
    /// Create a quad from four corner points.
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// Create a quad from a point slice, which must hold exactly four points.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        let points: [Point; 4] = points.try_into().map_err(|_| {
            Error::InvalidQuadrilateral(format!("expected 4 points, got {}", points.len()))
        })?;
        Ok(Self { points })
    }

    /// Create an axis-aligned quad covering a bounding box.
    pub fn from_rect(rect: &BoundingBox) -> Self {
        Self {
            points: [
                Point::new(rect.x1, rect.y1),
                Point::new(rect.x2, rect.y1),
                Point::new(rect.x2, rect.y2),
                Point::new(rect.x1, rect.y2),
            ],
        }
    }

    /// Length of the top edge (P0 to P1).
    pub fn top_edge(&self) -> f32 {
        self.points[0].distance(&self.points[1])
    }

    /// Length of the right edge (P1 to P2).
    pub fn right_edge(&self) -> f32 {
        self.points[1].distance(&self.points[2])
    }

    /// Reject degenerate quads with a zero-length top or right edge.
    pub fn validate(&self) -> Result<()> {
        if self.top_edge() == 0.0 || self.right_edge() == 0.0 {
            return Err(Error::InvalidQuadrilateral(format!(
                "degenerate edge (w={}, h={})",
                self.top_edge(),
                self.right_edge()
            )));
        }
        Ok(())
    }

    /// Classify the text direction of this quad.
    ///
    /// With `w` the top-edge length and `h` the right-edge length, the line
    /// is vertical iff `h > 2w`. The boundary `h == 2w` is horizontal. The
    /// factor is fixed at 2 for output parity with the detection models.
    pub fn direction(&self) -> TextDirection {
        if self.right_edge() > self.top_edge() * 2.0 {
            TextDirection::Vertical
        } else {
            TextDirection::Horizontal
        }
    }

    /// Smallest axis-aligned box covering the quad.
    pub fn bounding_box(&self) -> BoundingBox {
        let xs = self.points.map(|p| p.x);
        let ys = self.points.map(|p| p.y);
        BoundingBox::new(
            xs.iter().copied().fold(f32::INFINITY, f32::min),
            ys.iter().copied().fold(f32::INFINITY, f32::min),
            xs.iter().copied().fold(f32::NEG_INFINITY, f32::max),
            ys.iter().copied().fold(f32::NEG_INFINITY, f32::max),
        )
    }
}
