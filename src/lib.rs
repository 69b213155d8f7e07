//! # unscan
//!
//! Structured document reconstruction from OCR detections.
//!
//! This library takes the geometric output of external perception models
//! (region boxes, table cell grids, recognized text lines), fuses it into
//! a coherent document model with a defined reading order, and exports the
//! result as JSON, CSV, HTML, Markdown, or direction-filtered plain text.
//! The models themselves (detection, recognition, layout classification)
//! stay outside the crate, behind the traits in [`perception`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use unscan::{DocumentAnalyzer, ExportOptions, OutputFormat};
//!
//! fn main() -> unscan::Result<()> {
//!     # fn collaborators() -> DocumentAnalyzer { unimplemented!() }
//!     let analyzer: DocumentAnalyzer = collaborators();
//!     let image = image::RgbImage::new(1240, 1754);
//!
//!     let page = analyzer.analyze(&image)?;
//!     let doc = unscan::Document::single(page);
//!
//!     let html = unscan::export(&doc, OutputFormat::Html, &ExportOptions::default())?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Perception** ([`perception`]): collaborator traits for the region
//!   detector, table-grid recognizer, text recognizer, and page source.
//! - **Reconstruction** ([`analyzer`]): decode postprocessing, layout
//!   fusion, and page/document assembly. Pure once the observations are
//!   collected, so pages fan out in parallel and recorded observations
//!   replay without any model loaded.
//! - **Export** ([`render`]): deterministic serializers over the finished
//!   [`Document`].

pub mod analyzer;
pub mod error;
pub mod geometry;
pub mod model;
pub mod perception;
pub mod render;

// Re-export commonly used types
pub use analyzer::{BatchOutcome, DocumentAnalyzer, TextRecognition};
pub use error::{Error, Result};
pub use geometry::{BoundingBox, Point, Quad, TextDirection};
pub use model::{Document, Figure, Page, Paragraph, Table, TableCell};
pub use perception::{
    Collaborator, DetectedRegion, PageObservation, PageSource, RawTextLine, RegionDetection,
    RegionDetector, TableGrid, TableStructureRecognizer, TextRecognizer,
};
pub use render::{ExportOptions, JsonFormat, OutputFormat, ReadingOrder, TopToBottom};

use image::RgbImage;

/// Serialize a document in the requested format.
///
/// Figure export is skipped here since no page images are available; use
/// [`export_with_images`] when figure crops are wanted.
pub fn export(doc: &Document, format: OutputFormat, options: &ExportOptions) -> Result<String> {
    match format {
        OutputFormat::Json => render::to_json(doc, options, JsonFormat::Pretty),
        OutputFormat::Csv => render::to_csv(doc, options),
        OutputFormat::Html => render::to_html(doc, options),
        OutputFormat::Markdown => render::to_markdown(doc, options),
        OutputFormat::Text(direction) => Ok(render::extract_by_direction(doc, direction)),
    }
}

/// Serialize a document in the requested format, with the per-page source
/// images available for figure export.
pub fn export_with_images(
    doc: &Document,
    images: &[RgbImage],
    format: OutputFormat,
    options: &ExportOptions,
) -> Result<String> {
    match format {
        OutputFormat::Html => render::to_html_with_images(doc, images, options),
        OutputFormat::Markdown => render::to_markdown_with_images(doc, images, options),
        _ => export(doc, format, options),
    }
}

/// Extract the plain text of all paragraphs with the given direction.
pub fn extract_text(doc: &Document, direction: TextDirection) -> String {
    render::extract_by_direction(doc, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> Document {
        let mut page = Page::new(0);
        page.paragraphs.push(Paragraph::new(
            BoundingBox::new(0.0, 0.0, 100.0, 20.0),
            0.9,
            "hello",
            TextDirection::Horizontal,
        ));
        Document::single(page)
    }

    #[test]
    fn test_export_dispatch() {
        let doc = sample_doc();
        let options = ExportOptions::default();

        assert!(export(&doc, OutputFormat::Json, &options)
            .unwrap()
            .contains("\"pages\""));
        assert!(export(&doc, OutputFormat::Html, &options)
            .unwrap()
            .contains("<p>hello</p>"));
        assert!(export(&doc, OutputFormat::Markdown, &options)
            .unwrap()
            .contains("hello"));
        assert!(export(&doc, OutputFormat::Csv, &options)
            .unwrap()
            .starts_with("page_index,"));
    }

    #[test]
    fn test_export_text_alias() {
        let doc = sample_doc();
        let options = ExportOptions::default();

        let text = export(
            &doc,
            OutputFormat::Text(TextDirection::Horizontal),
            &options,
        )
        .unwrap();
        assert_eq!(text, "hello");

        let empty = export(&doc, OutputFormat::Text(TextDirection::Vertical), &options).unwrap();
        assert_eq!(empty, "");
    }

    #[test]
    fn test_extract_text() {
        let doc = sample_doc();
        assert_eq!(extract_text(&doc, TextDirection::Horizontal), "hello");
    }
}
