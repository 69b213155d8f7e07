//! Document-level types.

use serde::{Deserialize, Serialize};

use super::Page;

/// A reconstructed document: one page per source image, in source order.
///
/// A single image yields a one-page document; a multi-page source yields
/// one page per rendered image. Pages are never reconciled across
/// boundaries: a table split over two pages stays two tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in source order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Create a document from already-assembled pages, in source order.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Create a single-page document.
    pub fn single(page: Page) -> Self {
        Self { pages: vec![page] }
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
