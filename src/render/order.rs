//! Reading-order strategies for narrative export.

use crate::model::{Page, Paragraph, Table};

/// A page element that takes part in narrative flow. Figures are exported
/// separately and never appear here.
#[derive(Debug, Clone, Copy)]
pub enum PageElement<'a> {
    /// A paragraph in narrative flow
    Paragraph(&'a Paragraph),
    /// A table in narrative flow
    Table(&'a Table),
}

impl PageElement<'_> {
    /// Minimum y-coordinate of the element's box.
    pub fn top(&self) -> f32 {
        match self {
            PageElement::Paragraph(p) => p.box_.top(),
            PageElement::Table(t) => t.box_.top(),
        }
    }
}

/// Strategy deciding the linear order in which paragraphs and tables are
/// emitted for HTML and Markdown export.
///
/// The document schema and serializers are order-strategy agnostic;
/// swapping in a multi-column-aware implementation changes neither.
pub trait ReadingOrder {
    /// Order the narrative elements of one page.
    fn order<'a>(&self, page: &'a Page) -> Vec<PageElement<'a>>;
}

/// The default single-axis order: a stable sort of paragraphs and tables
/// by the top of their box. Elements at the same height in different
/// columns keep their detector output order, a documented limitation
/// rather than a defect to repair here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopToBottom;

impl ReadingOrder for TopToBottom {
    fn order<'a>(&self, page: &'a Page) -> Vec<PageElement<'a>> {
        let mut elements: Vec<PageElement<'a>> = page
            .paragraphs
            .iter()
            .map(PageElement::Paragraph)
            .chain(page.tables.iter().map(PageElement::Table))
            .collect();
        elements.sort_by(|a, b| a.top().total_cmp(&b.top()));
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use crate::model::TextDirection;

    #[test]
    fn test_top_to_bottom_interleaves_tables_and_paragraphs() {
        let mut page = Page::new(0);
        page.paragraphs.push(Paragraph::new(
            BoundingBox::new(0.0, 300.0, 100.0, 320.0),
            0.9,
            "below",
            TextDirection::Horizontal,
        ));
        page.paragraphs.push(Paragraph::new(
            BoundingBox::new(0.0, 10.0, 100.0, 30.0),
            0.9,
            "above",
            TextDirection::Horizontal,
        ));
        page.tables.push(Table::new(
            BoundingBox::new(0.0, 100.0, 100.0, 200.0),
            0.8,
            Vec::new(),
        ));

        let ordered = TopToBottom.order(&page);
        assert!(matches!(ordered[0], PageElement::Paragraph(p) if p.contents.as_deref() == Some("above")));
        assert!(matches!(ordered[1], PageElement::Table(_)));
        assert!(matches!(ordered[2], PageElement::Paragraph(p) if p.contents.as_deref() == Some("below")));
    }

    #[test]
    fn test_equal_height_keeps_detector_order() {
        let mut page = Page::new(0);
        for label in ["first", "second"] {
            page.paragraphs.push(Paragraph::new(
                BoundingBox::new(0.0, 50.0, 100.0, 70.0),
                0.9,
                label,
                TextDirection::Horizontal,
            ));
        }

        let ordered = TopToBottom.order(&page);
        assert!(matches!(ordered[0], PageElement::Paragraph(p) if p.contents.as_deref() == Some("first")));
    }
}
