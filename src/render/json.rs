//! JSON export.

use crate::error::{Error, Result};
use crate::model::Document;

use super::ExportOptions;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document to JSON.
///
/// The output mirrors the document model field for field; paragraphs and
/// cells without contents serialize as JSON `null`, not as empty strings.
pub fn to_json(doc: &Document, options: &ExportOptions, format: JsonFormat) -> Result<String> {
    let result = if options.ignore_line_break {
        let stripped = strip_line_breaks(doc);
        serialize(&stripped, format)
    } else {
        serialize(doc, format)
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

fn serialize(doc: &Document, format: JsonFormat) -> serde_json::Result<String> {
    match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    }
}

/// Copy of the document with line breaks removed from all contents.
fn strip_line_breaks(doc: &Document) -> Document {
    let mut doc = doc.clone();
    for page in &mut doc.pages {
        for paragraph in &mut page.paragraphs {
            if let Some(contents) = &mut paragraph.contents {
                *contents = contents.replace('\n', "");
            }
        }
        for table in &mut page.tables {
            for cell in &mut table.cells {
                if let Some(contents) = &mut cell.contents {
                    *contents = contents.replace('\n', "");
                }
            }
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use crate::model::{Page, Paragraph, TextDirection};

    fn doc_with_text(text: &str) -> Document {
        let mut page = Page::new(0);
        page.paragraphs.push(Paragraph::new(
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            0.9,
            text,
            TextDirection::Horizontal,
        ));
        Document::single(page)
    }

    #[test]
    fn test_pretty_and_compact() {
        let doc = doc_with_text("hello");
        let options = ExportOptions::default();

        let pretty = to_json(&doc, &options, JsonFormat::Pretty).unwrap();
        assert!(pretty.contains('\n'));

        let compact = to_json(&doc, &options, JsonFormat::Compact).unwrap();
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_ignore_line_break_strips_contents() {
        let doc = doc_with_text("two\nlines");
        let options = ExportOptions::new().with_ignore_line_break(true);

        let json = to_json(&doc, &options, JsonFormat::Compact).unwrap();
        assert!(json.contains("twolines"));
    }

    #[test]
    fn test_round_trip() {
        let doc = doc_with_text("hello");
        let json = to_json(&doc, &ExportOptions::default(), JsonFormat::Pretty).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
