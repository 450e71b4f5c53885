//! DOM Operations Adapter
//!
//! Read-only view of a parsed HTML snapshot on top of the `dom_query` crate.
//! The extraction heuristics only ever look at tag names, attributes,
//! inline-style visibility and rendered text, so that is all this layer
//! exposes. Nothing here mutates the tree.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

pub use tendril::StrTendril;

use crate::patterns::{HIDDEN_STYLE, WHITESPACE_RUN};

/// Elements whose content never renders as text.
const NON_RENDERED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// Elements that start a new line when text is rendered.
const RENDER_BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table", "tr", "ul",
];

// === Parsing ===

/// Parse an HTML snapshot into a document.
///
/// Malformed markup is repaired by the HTML5 tree builder, never rejected.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The document's `body`, or the document node when there is none.
#[must_use]
pub fn body(doc: &Document) -> NodeRef<'_> {
    doc.select("body")
        .nodes()
        .first()
        .copied()
        .unwrap_or_else(|| doc.root())
}

// === Node Information ===

/// Lowercased tag name, `None` for anything that is not an element.
#[must_use]
pub fn tag_name(node: &NodeRef<'_>) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn attr(node: &NodeRef<'_>, name: &str) -> Option<StrTendril> {
    node.attr(name)
}

/// Whether the element is taken out of rendering by its own markup:
/// the `hidden` attribute, or an inline `display: none` /
/// `visibility: hidden` declaration.
#[must_use]
pub fn is_hidden(node: &NodeRef<'_>) -> bool {
    if !node.is_element() {
        return false;
    }
    if node.attr("hidden").is_some() {
        return true;
    }
    node.attr("style")
        .is_some_and(|style| HIDDEN_STYLE.is_match(&style))
}

// === Text Content ===

enum Visit<'a> {
    Open(NodeRef<'a>),
    LineBreak,
    Space,
}

/// Approximation of a browser's `innerText` for `node`.
///
/// Hidden and non-rendered descendants are skipped, whitespace runs are
/// collapsed, `br` and block-level boundaries become line breaks, blank
/// lines are dropped and the result is trimmed.
#[must_use]
pub fn rendered_text(node: &NodeRef<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut stack = vec![Visit::Open(*node)];
    let root_id = node.id;

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::LineBreak => flush_line(&mut current, &mut lines),
            Visit::Space => current.push(' '),
            Visit::Open(n) if n.is_text() => {
                current.push_str(&WHITESPACE_RUN.replace_all(&n.text(), " "));
            }
            Visit::Open(n) => {
                let Some(tag) = tag_name(&n) else {
                    continue;
                };
                if NON_RENDERED_TAGS.contains(&tag.as_str()) || (n.id != root_id && is_hidden(&n)) {
                    continue;
                }
                match tag.as_str() {
                    "br" => {
                        flush_line(&mut current, &mut lines);
                        continue;
                    }
                    "td" | "th" => stack.push(Visit::Space),
                    t if RENDER_BLOCK_TAGS.contains(&t) => {
                        flush_line(&mut current, &mut lines);
                        stack.push(Visit::LineBreak);
                    }
                    _ => {}
                }
                for child in n.children().into_iter().rev() {
                    stack.push(Visit::Open(child));
                }
            }
        }
    }
    flush_line(&mut current, &mut lines);

    lines.join("\n")
}

fn flush_line(current: &mut String, lines: &mut Vec<String>) {
    let line = WHITESPACE_RUN.replace_all(current.trim(), " ");
    if !line.is_empty() {
        lines.push(line.into_owned());
    }
    current.clear();
}
