//! Export serializers.
//!
//! Every serializer is a pure function from a complete [`Document`] to a
//! string, deterministic for identical input: no timestamps, no locale
//! formatting. Inconsistent table grids (overlapping spans and the like)
//! are serialized exactly as declared rather than validated.

mod csv;
mod figures;
mod html;
mod json;
mod markdown;
pub mod order;
mod options;
mod text;

pub use csv::to_csv;
pub use html::{to_html, to_html_with_images, to_html_with_order};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_images, to_markdown_with_order};
pub use options::{ExportOptions, OutputFormat};
pub use order::{PageElement, ReadingOrder, TopToBottom};
pub use text::extract_by_direction;

/// Resolve optional contents under the line-break policy. `None` renders
/// as an empty string in textual formats (JSON keeps it as `null`).
pub(crate) fn finalize_contents(
    contents: Option<&str>,
    options: &ExportOptions,
) -> String {
    let contents = contents.unwrap_or("");
    if options.ignore_line_break {
        contents.replace('\n', "")
    } else {
        contents.to_string()
    }
}
