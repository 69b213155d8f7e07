//! Page-level types.

use serde::{Deserialize, Serialize};

use super::{Figure, Paragraph, Table};

/// A single analyzed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page index within the source file
    pub page_index: usize,

    /// Paragraph regions, in detector output order
    pub paragraphs: Vec<Paragraph>,

    /// Table regions, in detector output order
    pub tables: Vec<Table>,

    /// Figure regions, in detector output order
    pub figures: Vec<Figure>,
}

impl Page {
    /// Create an empty page.
    pub fn new(page_index: usize) -> Self {
        Self {
            page_index,
            paragraphs: Vec::new(),
            tables: Vec::new(),
            figures: Vec::new(),
        }
    }

    /// Check if the page has no regions at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty() && self.figures.is_empty()
    }

    /// Total number of regions on the page.
    pub fn region_count(&self) -> usize {
        self.paragraphs.len() + self.tables.len() + self.figures.len()
    }
}
