//! Export options and output-format tokens.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::TextDirection;

/// Options shared by the export serializers.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Strip line breaks from recognized contents in the output
    pub ignore_line_break: bool,

    /// Export cropped figure images alongside HTML/Markdown output
    pub export_figure: bool,

    /// Also export crops of the text lines inside each figure
    pub export_figure_letter: bool,

    /// Width in pixels of exported figure thumbnails
    pub figure_width: u32,

    /// Directory figure crops are written to
    pub figure_dir: PathBuf,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip line breaks from contents.
    pub fn with_ignore_line_break(mut self, ignore: bool) -> Self {
        self.ignore_line_break = ignore;
        self
    }

    /// Enable or disable figure export.
    pub fn with_figures(mut self, export: bool) -> Self {
        self.export_figure = export;
        self
    }

    /// Enable or disable per-letter crops inside figures.
    pub fn with_figure_letters(mut self, export: bool) -> Self {
        self.export_figure_letter = export;
        self
    }

    /// Set the figure thumbnail width.
    pub fn with_figure_width(mut self, width: u32) -> Self {
        self.figure_width = width;
        self
    }

    /// Set the figure output directory.
    pub fn with_figure_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.figure_dir = dir.into();
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            ignore_line_break: false,
            export_figure: false,
            export_figure_letter: false,
            figure_width: 200,
            figure_dir: PathBuf::from("figures"),
        }
    }
}

/// An output format recognized at the export boundary.
///
/// Parsed from the tokens `json`, `csv`, `html`, `md`/`markdown`, and the
/// text-only aliases `vertical` / `horizontal`. Anything else is a
/// configuration error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Structural JSON dump
    Json,
    /// Flattened CSV
    Csv,
    /// HTML
    Html,
    /// Markdown
    Markdown,
    /// Plain text filtered to one direction
    Text(TextDirection),
}

impl OutputFormat {
    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
            OutputFormat::Text(_) => "txt",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "horizontal" => Ok(OutputFormat::Text(TextDirection::Horizontal)),
            "vertical" => Ok(OutputFormat::Text(TextDirection::Vertical)),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}
