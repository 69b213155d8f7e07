//! Text decode postprocessing.
//!
//! Turns raw recognizer output (token sequences plus target
//! quadrilaterals) into decoded strings, confidence scores, and direction
//! labels. Decoded text is normalized to NFKC so full-width/half-width and
//! combining-character variants compare equal across locales.

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::geometry::{Quad, TextDirection};
use crate::perception::RawTextLine;

/// Postprocessed recognition output for one batch of regions.
///
/// The four vectors are parallel and order-preserving with the input:
/// entry `i` describes input region `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRecognition {
    /// Decoded, NFKC-normalized text per region
    pub contents: Vec<String>,

    /// Direction label per region
    pub directions: Vec<TextDirection>,

    /// Recognition confidence per region
    pub scores: Vec<f32>,

    /// Target quadrilateral per region
    pub points: Vec<Quad>,
}

impl TextRecognition {
    /// Number of regions in the batch.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Decode a batch of raw text lines.
///
/// A malformed quadrilateral (degenerate edge) fails the whole call; the
/// caller decides whether to drop the page or propagate. Nothing is
/// silently coerced.
pub fn decode_lines(lines: &[RawTextLine]) -> Result<TextRecognition> {
    let mut result = TextRecognition::default();

    for line in lines {
        line.quad.validate()?;

        result.contents.push(decode_tokens(&line.tokens));
        result.directions.push(line.quad.direction());
        result.scores.push(line.score);
        result.points.push(line.quad);
    }

    Ok(result)
}

/// Concatenate tokens and fold the result to NFKC.
fn decode_tokens(tokens: &[String]) -> String {
    tokens.concat().nfkc().collect()
}
