//! Table extraction.
//!
//! Rows are every `tr` descendant, so `thead`/`tbody` wrappers need no
//! special handling. Extraction is terminal: the walker never descends into
//! a table it handed to this module.

use dom_query::NodeRef;

use crate::content::{Cell, ContentItem, Row};
use crate::dom;
use crate::extractor::tags::CELL_TAGS;
use crate::patterns::BOLD_STYLE;
use crate::selector::{query_all, utils};

fn is_row(node: &NodeRef) -> bool {
    utils::is_one_of_tags(node, &["tr"])
}

fn is_cell(node: &NodeRef) -> bool {
    utils::is_one_of_tags(node, &CELL_TAGS)
}

/// Convert a `table` element into a `ContentItem::Table`.
///
/// Returns `None` when the table has no rows.
#[must_use]
pub fn extract_table(table: &NodeRef) -> Option<ContentItem> {
    let rows: Vec<Row> = query_all(table, is_row)
        .iter()
        .map(|tr| query_all(tr, is_cell).iter().map(extract_cell).collect())
        .collect();

    if rows.is_empty() {
        log::debug!("table dropped: no rows");
        return None;
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    Some(ContentItem::Table { width, rows })
}

fn extract_cell(cell: &NodeRef) -> Cell {
    let header = dom::tag_name(cell).as_deref() == Some("th");
    let styled_bold = dom::attr(cell, "style").is_some_and(|style| BOLD_STYLE.is_match(&style));

    Cell {
        text: dom::rendered_text(cell),
        bold: header || styled_bold,
    }
}
