//! Integration tests for the export serializers.

use unscan::render::{to_csv, to_html, to_json, to_markdown, JsonFormat};
use unscan::{
    BoundingBox, Document, ExportOptions, OutputFormat, Page, Paragraph, Table, TableCell,
    TextDirection,
};

fn bbox(y: f32) -> BoundingBox {
    BoundingBox::new(0.0, y, 100.0, y + 20.0)
}

fn paragraph(text: &str, y: f32) -> Paragraph {
    Paragraph::new(bbox(y), 0.9, text, TextDirection::Horizontal)
}

#[test]
fn test_table_row_grouping() {
    // Cells (1,1), (1,2), (2,1) become two rows: two tds, then one.
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
    let doc = Document::single(page);

    let html = to_html(&doc, &ExportOptions::default()).unwrap();
    assert_eq!(html.matches("<tr>").count(), 2);

    let rows: Vec<&str> = html.split("<tr>").skip(1).collect();
    assert_eq!(rows[0].split("</tr>").next().unwrap().matches("<td").count(), 2);
    assert_eq!(rows[1].split("</tr>").next().unwrap().matches("<td").count(), 1);
}

#[test]
fn test_escaping_applied_exactly_once() {
    let mut page = Page::new(0);
    page.paragraphs.push(paragraph("<b>&amp;", 0.0));
    let doc = Document::single(page);
    let options = ExportOptions::default();

    let html = to_html(&doc, &options).unwrap();
    assert!(html.contains("&lt;b&gt;&amp;amp;"));
    assert!(!html.contains("&amp;lt;"));

    let md = to_markdown(&doc, &options).unwrap();
    assert!(md.contains("&lt;b&gt;&amp;amp;"));
    assert!(!md.contains("&amp;lt;"));
}

#[test]
fn test_direction_filter() {
    let mut page = Page::new(0);
    page.paragraphs.push(paragraph("A", 0.0));
    page.paragraphs
        .push(Paragraph::new(bbox(30.0), 0.9, "B", TextDirection::Vertical));
    page.paragraphs.push(Paragraph::empty(bbox(60.0), 0.9));
    let doc = Document::single(page);

    assert_eq!(
        unscan::extract_text(&doc, TextDirection::Horizontal),
        "A"
    );
    assert_eq!(unscan::extract_text(&doc, TextDirection::Vertical), "B");
}

#[test]
fn test_multi_page_concatenation() {
    let pages: Vec<Page> = (0..3)
        .map(|i| {
            let mut page = Page::new(i);
            page.paragraphs.push(paragraph(&format!("page {}", i + 1), 0.0));
            page
        })
        .collect();
    let doc = Document::from_pages(pages);
    let options = ExportOptions::default();

    let json = to_json(&doc, &options, JsonFormat::Pretty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pages"].as_array().unwrap().len(), 3);
    assert_eq!(value["pages"][0]["page_index"], 0);
    assert_eq!(value["pages"][2]["page_index"], 2);

    let md = to_markdown(&doc, &options).unwrap();
    assert_eq!(md.matches("## Page").count(), 2);
    assert!(md.contains("## Page 2"));
    assert!(md.contains("## Page 3"));
}

#[test]
fn test_json_round_trip_preserves_all_fields() {
    let mut page = Page::new(0);
    page.paragraphs.push(paragraph("text", 0.0));
    page.paragraphs.push(Paragraph::empty(bbox(30.0), 0.5));
    page.tables.push(Table::new(
        bbox(60.0),
        0.8,
        vec![
            TableCell::new(1, 1, Some("cell".into()), bbox(60.0)).with_col_span(2),
            TableCell::new(2, 1, None, bbox(70.0)),
        ],
    ));
    page.figures
        .push(unscan::Figure::new(bbox(100.0), 0.7));
    let doc = Document::single(page);

    let json = to_json(&doc, &ExportOptions::default(), JsonFormat::Pretty).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(doc, back);
}

#[test]
fn test_null_contents_serializes_as_json_null() {
    let mut page = Page::new(0);
    page.paragraphs.push(Paragraph::empty(bbox(0.0), 0.5));
    let doc = Document::single(page);

    let json = to_json(&doc, &ExportOptions::default(), JsonFormat::Compact).unwrap();
    assert!(json.contains("\"contents\":null"));
    assert!(!json.contains("\"contents\":\"\""));
}

#[test]
fn test_csv_column_contract() {
    let mut page = Page::new(1);
    page.tables.push(Table::new(
        bbox(0.0),
        0.9,
        vec![TableCell::new(2, 3, Some("x, y".into()), bbox(0.0)).with_row_span(2)],
    ));
    page.paragraphs.push(paragraph("plain", 30.0));
    let doc = Document::single(page);

    let csv = to_csv(&doc, &ExportOptions::default()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "page_index,kind,row,col,row_span,col_span,contents");
    assert_eq!(lines[1], "1,table_cell,2,3,2,1,\"x, y\"");
    assert_eq!(lines[2], "1,paragraph,,,,,plain");
}

#[test]
fn test_inconsistent_grid_does_not_crash() {
    // Two cells whose spans overlap the same position: undefined visual
    // output is fine, panicking is not.
    let mut page = Page::new(0);
    page.tables.push(Table::new(
        bbox(0.0),
        0.9,
        vec![
            TableCell::new(1, 1, Some("a".into()), bbox(0.0))
                .with_row_span(2)
                .with_col_span(2),
            TableCell::new(2, 2, Some("b".into()), bbox(10.0)),
        ],
    ));
    let doc = Document::single(page);
    let options = ExportOptions::default();

    assert!(to_html(&doc, &options).is_ok());
    assert!(to_markdown(&doc, &options).is_ok());
    assert!(to_csv(&doc, &options).is_ok());
}

#[test]
fn test_reading_order_spans_paragraphs_and_tables() {
    let mut page = Page::new(0);
    page.paragraphs.push(paragraph("below table", 200.0));
    page.tables.push(Table::new(
        bbox(50.0),
        0.9,
        vec![TableCell::new(1, 1, Some("in table".into()), bbox(50.0))],
    ));
    page.paragraphs.push(paragraph("above table", 0.0));
    let doc = Document::single(page);

    let html = to_html(&doc, &ExportOptions::default()).unwrap();
    let above = html.find("above table").unwrap();
    let table = html.find("in table").unwrap();
    let below = html.find("below table").unwrap();
    assert!(above < table && table < below);
}

#[test]
fn test_unknown_format_token_is_rejected() {
    assert!("xml".parse::<OutputFormat>().is_err());
    assert!("".parse::<OutputFormat>().is_err());
    assert!("md".parse::<OutputFormat>().is_ok());
    assert!("markdown".parse::<OutputFormat>().is_ok());
}
