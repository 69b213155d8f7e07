//! Markdown export.
//!
//! Follows the same reading-order and escaping discipline as the HTML
//! serializer, emitting pipe tables and plain paragraphs. Tables
//! replicate spanned cells into every grid position they cover, since
//! Markdown has no span syntax. `## Page N` markers separate pages from
//! the second page on.

use image::RgbImage;

use crate::error::Result;
use crate::model::{Document, Table};

use super::figures::export_page_figures;
use super::order::{PageElement, ReadingOrder, TopToBottom};
use super::{finalize_contents, ExportOptions};

/// Serialize a document to Markdown.
pub fn to_markdown(doc: &Document, options: &ExportOptions) -> Result<String> {
    render(doc, None, options, &TopToBottom)
}

/// Serialize a document to Markdown, exporting figure crops from the
/// per-page source images when figure export is enabled.
pub fn to_markdown_with_images(
    doc: &Document,
    images: &[RgbImage],
    options: &ExportOptions,
) -> Result<String> {
    render(doc, Some(images), options, &TopToBottom)
}

/// Serialize a document to Markdown with a custom reading-order strategy.
pub fn to_markdown_with_order(
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
    let mut output = String::new();

    for page in &doc.pages {
        if page.page_index > 0 {
            output.push_str(&format!("## Page {}\n\n", page.page_index + 1));
        }

        for element in order.order(page) {
            match element {
                PageElement::Paragraph(p) => {
                    let contents = finalize_contents(p.contents.as_deref(), options);
                    if !contents.is_empty() {
                        output.push_str(&escape_markdown(&contents));
                        output.push_str("\n\n");
                    }
                }
                PageElement::Table(t) => render_table(&mut output, t, options),
            }
        }

        if options.export_figure {
            if let Some(image) = images.and_then(|imgs| imgs.get(page.page_index)) {
                for figure in export_page_figures(page, image, options)? {
                    output.push_str(&format!("![figure]({})\n\n", figure.path.display()));
                }
            }
        }
    }

    Ok(output.trim_end().to_string())
}

fn render_table(output: &mut String, table: &Table, options: &ExportOptions) {
    if table.is_empty() {
        return;
    }

    let n_rows = table.row_count() as usize;
    let n_cols = table.col_count() as usize;
    let mut grid = vec![vec![String::new(); n_cols]; n_rows];

    // Spanned cells are written into every position they cover. The grid
    // dimensions come from the declared extents, so out-of-bounds spans
    // cannot occur; overlapping declarations simply overwrite.
    for cell in &table.cells {
        let contents = finalize_contents(cell.contents.as_deref(), options);
        let contents = escape_markdown(&contents).replace('\n', "<br>");
        let r0 = cell.row.saturating_sub(1) as usize;
        let c0 = cell.col.saturating_sub(1) as usize;
        for i in 0..cell.row_span as usize {
            for j in 0..cell.col_span as usize {
                if r0 + i < n_rows && c0 + j < n_cols {
                    grid[r0 + i][c0 + j] = contents.clone();
                }
            }
        }
    }

    for (i, row) in grid.iter().enumerate() {
        output.push('|');
        for cell in row {
            output.push_str(&format!(" {} |", cell));
        }
        output.push('\n');

        if i == 0 {
            output.push('|');
            for _ in 0..n_cols {
                output.push_str(" --- |");
            }
            output.push('\n');
        }
    }

    output.push('\n');
}

/// One-pass escaping: Markdown metacharacters get a backslash, HTML-active
/// characters become entities so re-export never escapes twice.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
