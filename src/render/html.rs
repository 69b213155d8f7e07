//! HTML export.
//!
//! Emits one bordered `<table>` per table region and one `<p>` per
//! paragraph, ordered by the reading-order strategy, wrapped in
//! `<html><body>` and indent-pretty-printed. Multi-page documents get an
//! `<h2>Page N</h2>` marker before every page after the first.

use image::RgbImage;

use crate::error::Result;
use crate::model::{Document, Table};

use super::figures::export_page_figures;
use super::order::{PageElement, ReadingOrder, TopToBottom};
use super::{finalize_contents, ExportOptions};

/// Serialize a document to HTML.
pub fn to_html(doc: &Document, options: &ExportOptions) -> Result<String> {
    render(doc, None, options, &TopToBottom)
}

/// Serialize a document to HTML, exporting figure crops from the
/// per-page source images when figure export is enabled.
pub fn to_html_with_images(
    doc: &Document,
    images: &[RgbImage],
    options: &ExportOptions,
) -> Result<String> {
    render(doc, Some(images), options, &TopToBottom)
}

/// Serialize a document to HTML with a custom reading-order strategy.
pub fn to_html_with_order(
    doc: &Document,
    options: &ExportOptions,
    order: &dyn ReadingOrder,
) -> Result<String> {
    render(doc, None, options, order)
}

fn render(
    doc: &Document,
    images: Option<&[RgbImage]>,
    options: &ExportOptions,
    order: &dyn ReadingOrder,
) -> Result<String> {
    let mut w = Writer::new();
    w.open("<html>");
    w.open("<body>");

    for page in &doc.pages {
        if page.page_index > 0 {
            w.line(&format!("<h2>Page {}</h2>", page.page_index + 1));
        }

        for element in order.order(page) {
            match element {
                PageElement::Paragraph(p) => {
                    let contents = finalize_contents(p.contents.as_deref(), options);
                    w.line(&format!("<p>{}</p>", escape_html(&contents)));
                }
                PageElement::Table(t) => write_table(&mut w, t, options),
            }
        }

        if options.export_figure {
            if let Some(image) = images.and_then(|imgs| imgs.get(page.page_index)) {
                for figure in export_page_figures(page, image, options)? {
                    w.line(&format!(
                        "<img src=\"{}\" width=\"{}\">",
                        figure.path.display(),
                        figure.width
                    ));
                }
            }
        }
    }

    w.close("</body>");
    w.close("</html>");
    Ok(w.finish())
}

fn write_table(w: &mut Writer, table: &Table, options: &ExportOptions) {
    w.open("<table border=\"1\" style=\"border-collapse: collapse\">");

    // Cells arrive row-major; a row closes whenever the row number
    // changes from the previous cell.
    let mut pre_row = table.cells.first().map(|c| c.row);
    let mut row: Vec<String> = Vec::new();
    for cell in &table.cells {
        if Some(cell.row) != pre_row {
            flush_row(w, &mut row);
            pre_row = Some(cell.row);
        }
        let contents = finalize_contents(cell.contents.as_deref(), options);
        row.push(format!(
            "<td rowspan=\"{}\" colspan=\"{}\">{}</td>",
            cell.row_span,
            cell.col_span,
            escape_html(&contents)
        ));
    }
    flush_row(w, &mut row);

    w.close("</table>");
}

fn flush_row(w: &mut Writer, row: &mut Vec<String>) {
    if row.is_empty() {
        return;
    }
    w.open("<tr>");
    for td in row.drain(..) {
        w.line(&td);
    }
    w.close("</tr>");
}

/// One-pass HTML escaping of `& < > " '`. Applying the serializer once
/// per export keeps already-escaped input from being escaped twice.
pub(crate) fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Indent-aware markup writer.
struct Writer {
    out: String,
    depth: usize,
}

impl Writer {
    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    fn open(&mut self, tag: &str) {
        self.line(tag);
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(tag);
    }

    fn line(&mut self, content: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(content);
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use crate::model::{Page, Paragraph, TableCell, TextDirection};

    fn bbox(y: f32) -> BoundingBox {
        BoundingBox::new(0.0, y, 100.0, y + 20.0)
    }

    #[test]
    fn test_rows_close_on_row_change() {
        let mut page = Page::new(0);
        page.tables.push(Table::new(
            bbox(0.0),
            0.9,
            vec![
                TableCell::new(1, 1, Some("a".into()), bbox(0.0)),
                TableCell::new(1, 2, Some("b".into()), bbox(0.0)),
                TableCell::new(2, 1, Some("c".into()), bbox(10.0)),
            ],
        ));

        let html = to_html(&Document::single(page), &ExportOptions::default()).unwrap();
        assert_eq!(html.matches("<tr>").count(), 2);
        let first_row = &html[html.find("<tr>").unwrap()..html.find("</tr>").unwrap()];
        assert_eq!(first_row.matches("<td").count(), 2);
    }

    #[test]
    fn test_escape_html_once() {
        assert_eq!(escape_html("<b>&amp;"), "&lt;b&gt;&amp;amp;");
    }

    #[test]
    fn test_paragraphs_sorted_by_vertical_position() {
        let mut page = Page::new(0);
        page.paragraphs.push(Paragraph::new(
            bbox(100.0),
            0.9,
            "second",
            TextDirection::Horizontal,
        ));
        page.paragraphs.push(Paragraph::new(
            bbox(10.0),
            0.9,
            "first",
            TextDirection::Horizontal,
        ));

        let html = to_html(&Document::single(page), &ExportOptions::default()).unwrap();
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn test_page_markers_start_at_page_two() {
        let doc = Document::from_pages(vec![Page::new(0), Page::new(1), Page::new(2)]);
        let html = to_html(&doc, &ExportOptions::default()).unwrap();
        assert!(!html.contains("<h2>Page 1</h2>"));
        assert!(html.contains("<h2>Page 2</h2>"));
        assert!(html.contains("<h2>Page 3</h2>"));
    }

    #[test]
    fn test_wrapped_in_html_body() {
        let html = to_html(&Document::single(Page::new(0)), &ExportOptions::default()).unwrap();
        assert!(html.starts_with("<html>\n  <body>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
