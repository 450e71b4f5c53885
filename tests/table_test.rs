use page_clipper::{extract, Cell, ContentItem};

fn tables(html: &str) -> Vec<ContentItem> {
    extract(html)
        .into_iter()
        .filter(|item| matches!(item, ContentItem::Table { .. }))
        .collect()
}

fn cell(text: &str, bold: bool) -> Cell {
    Cell {
        text: text.to_string(),
        bold,
    }
}

#[test]
fn table_with_thead_and_tbody() {
    let html = r#"
        <table>
          <thead><tr><th>Crate</th><th>Version</th></tr></thead>
          <tbody>
            <tr><td>regex</td><td>1.11</td></tr>
            <tr><td>url</td><td>2.5</td></tr>
          </tbody>
        </table>
    "#;

    assert_eq!(
        tables(html),
        vec![ContentItem::Table {
            width: 2,
            rows: vec![
                vec![cell("Crate", true), cell("Version", true)],
                vec![cell("regex", false), cell("1.11", false)],
                vec![cell("url", false), cell("2.5", false)],
            ],
        }]
    );
}

#[test]
fn table_width_is_widest_row() {
    let html = "<table><tr><td>a</td></tr><tr><td>b</td><td>c</td><td>d</td></tr></table>";

    let found = tables(html);
    let [ContentItem::Table { width, rows }] = found.as_slice() else {
        panic!("expected one table");
    };
    assert_eq!(*width, 3);
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[1].len(), 3);
}

#[test]
fn table_inline_bold_style_marks_cell() {
    let html = r#"<table><tr><td style="font-weight: 700">Total</td><td style="font-weight:normal">9</td></tr></table>"#;

    let found = tables(html);
    let [ContentItem::Table { rows, .. }] = found.as_slice() else {
        panic!("expected one table");
    };
    assert_eq!(rows[0], vec![cell("Total", true), cell("9", false)]);
}

#[test]
fn table_cell_text_is_trimmed_rendered_text() {
    let html = "<table><tr><td>\n   spaced <b>out</b>\n </td></tr></table>";

    let found = tables(html);
    let [ContentItem::Table { rows, .. }] = found.as_slice() else {
        panic!("expected one table");
    };
    assert_eq!(rows[0][0].text, "spaced out");
}

#[test]
fn table_without_rows_is_not_emitted() {
    for html in [
        "<table></table>",
        "<table><caption>Empty</caption></table>",
        "<div><table> </table><p>text</p></div>",
    ] {
        assert!(tables(html).is_empty(), "unexpected table for {html:?}");
    }
}

#[test]
fn table_subtree_is_not_walked() {
    let html = r#"<table><tr><td><p>cell paragraph</p><img src="https://x.com/i.png"></td></tr></table>"#;

    let items = extract(html);
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], ContentItem::Table { .. }));
}

#[test]
fn nested_table_rows_flatten_into_outer_table() {
    let html = "<table><tr><td><table><tr><td>inner</td></tr></table></td></tr></table>";

    let found = tables(html);
    let [ContentItem::Table { rows, .. }] = found.as_slice() else {
        panic!("expected one table");
    };
    assert_eq!(rows.len(), 2);
}
