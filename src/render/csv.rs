//! CSV export.
//!
//! Flattened representation: one row per table cell, then one per
//! paragraph, page by page. The column set is an external-compatibility
//! contract pinned by the integration tests:
//!
//! ```text
//! page_index,kind,row,col,row_span,col_span,contents
//! ```
//!
//! Paragraph rows leave the grid columns empty.

use crate::error::Result;
use crate::model::Document;

use super::{finalize_contents, ExportOptions};

const HEADER: &str = "page_index,kind,row,col,row_span,col_span,contents";

/// Serialize a document to CSV.
pub fn to_csv(doc: &Document, options: &ExportOptions) -> Result<String> {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    for page in &doc.pages {
        for table in &page.tables {
            for cell in &table.cells {
                let contents = finalize_contents(cell.contents.as_deref(), options);
                output.push_str(&format!(
                    "{},table_cell,{},{},{},{},{}\n",
                    page.page_index,
                    cell.row,
                    cell.col,
                    cell.row_span,
                    cell.col_span,
                    escape_csv(&contents)
                ));
            }
        }
        for paragraph in &page.paragraphs {
            let contents = finalize_contents(paragraph.contents.as_deref(), options);
            output.push_str(&format!(
                "{},paragraph,,,,,{}\n",
                page.page_index,
                escape_csv(&contents)
            ));
        }
    }

    Ok(output)
}

/// Quote a field when it contains a separator, quote, or newline.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
