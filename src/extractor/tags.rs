//! Tag catalogs used by the walker.

/// Elements whose entry and exit are block boundaries.
pub static BLOCK_TAGS: [&str; 14] = [
    "p", "div", "section", "article", "li", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote",
    "table", "tr",
];

/// Structurally non-content elements, skipped with their whole subtree.
pub static SKIPPED_TAGS: [&str; 8] = [
    "script", "style", "nav", "footer", "header", "aside", "noscript", "iframe",
];

/// Inline elements that make their text bold.
pub static BOLD_TAGS: [&str; 2] = ["strong", "b"];

/// Headings too deep for a heading block; their text becomes a bold run.
pub static MINOR_HEADING_TAGS: [&str; 3] = ["h4", "h5", "h6"];

/// Table cell tags.
pub static CELL_TAGS: [&str; 2] = ["td", "th"];

#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

#[inline]
#[must_use]
pub fn is_skipped_tag(tag: &str) -> bool {
    SKIPPED_TAGS.contains(&tag)
}

/// Whether text under this element is bold.
#[inline]
#[must_use]
pub fn is_bold_tag(tag: &str) -> bool {
    BOLD_TAGS.contains(&tag) || MINOR_HEADING_TAGS.contains(&tag)
}

/// Heading level for `h1`-`h3`, `None` for everything else.
#[must_use]
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        _ => None,
    }
}
