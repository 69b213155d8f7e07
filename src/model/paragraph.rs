//! Paragraph types.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, TextDirection};

/// A paragraph region with its recognized text.
///
/// `contents` is `None` when no text line was recognized for the region;
/// such paragraphs are retained in the output rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Bounding box in pixel coordinates
    #[serde(rename = "box")]
    pub box_: BoundingBox,

    /// Detection confidence (0..1)
    pub score: f32,

    /// Recognized text, or `None` if no text region overlapped the box
    pub contents: Option<String>,

    /// Text orientation
    pub direction: TextDirection,
}

impl Paragraph {
    /// Create a paragraph with recognized text.
    pub fn new(
        box_: BoundingBox,
        score: f32,
        contents: impl Into<String>,
        direction: TextDirection,
    ) -> Self {
        Self {
            box_,
            score,
            contents: Some(contents.into()),
            direction,
        }
    }

    /// Create a paragraph with no recognized text.
    pub fn empty(box_: BoundingBox, score: f32) -> Self {
        Self {
            box_,
            score,
            contents: None,
            direction: TextDirection::Horizontal,
        }
    }

    /// Whether any text was recognized for this region.
    pub fn has_contents(&self) -> bool {
        self.contents.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_paragraph() {
        let p = Paragraph::empty(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 0.9);
        assert!(!p.has_contents());
        assert_eq!(p.direction, TextDirection::Horizontal);
    }

    #[test]
    fn test_null_contents_serializes_as_null() {
        let p = Paragraph::empty(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 0.9);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"contents\":null"));
    }
}
