//! Direction-filtered plain-text export.

use crate::geometry::TextDirection;
use crate::model::Document;

/// Concatenate the contents of all paragraphs matching `direction`.
///
/// Paragraphs keep their original (unsorted) order; entries with no
/// recognized text are skipped. Within a page the texts are joined by
/// newlines; pages with any matching text are joined by a blank line.
pub fn extract_by_direction(doc: &Document, direction: TextDirection) -> String {
    doc.pages
        .iter()
        .filter_map(|page| {
            let texts: Vec<&str> = page
                .paragraphs
                .iter()
                .filter(|p| p.direction == direction)
                .filter_map(|p| p.contents.as_deref())
                .collect();
            if texts.is_empty() {
                None
            } else {
                Some(texts.join("\n"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
