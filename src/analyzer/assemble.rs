//! Document assembly.
//!
//! Attaches recognized text to the fused layout and produces the
//! canonical per-page schema. Assembly is all-or-nothing: an error yields
//! no partial [`Page`].

use crate::error::{Error, Result};
use crate::model::{Document, Page, Paragraph};

use super::fusion::PageLayout;
use super::recognition::TextRecognition;

/// Assemble one page from its fused layout and recognition batch.
///
/// Paragraph `i` takes its contents and direction from recognition entry
/// `i`: the two sequences come from detectors invoked on the same ordered
/// box list, and matching is by that correspondence, not by geometric
/// containment. An empty decoded string means no text was read for the
/// region and becomes `contents: None` (kept in the output, not an error).
pub fn assemble_page(
    layout: PageLayout,
    text: &TextRecognition,
    page_index: usize,
) -> Result<Page> {
    if text.len() != layout.paragraphs.len() {
        return Err(Error::DetectionMismatch {
            what: "paragraph text",
            expected: layout.paragraphs.len(),
            actual: text.len(),
        });
    }

    let paragraphs = layout
        .paragraphs
        .into_iter()
        .enumerate()
        .map(|(i, region)| Paragraph {
            box_: region.box_,
            score: region.score,
            contents: match text.contents[i].as_str() {
                "" => None,
                s => Some(s.to_string()),
            },
            direction: text.directions[i],
        })
        .collect();

    Ok(Page {
        page_index,
        paragraphs,
        tables: layout.tables,
        figures: layout.figures,
    })
}

/// Concatenate assembled pages into a document, in source order.
///
/// No cross-page reconciliation happens here; regions split across a page
/// boundary stay split.
pub fn assemble_document(pages: Vec<Page>) -> Document {
    Document::from_pages(pages)
}
