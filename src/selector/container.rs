//! Main container location
//!
//! Picks the single node the walker traverses. Known "article body"
//! conventions are tried first in priority order; if none carries enough
//! text, the `div`/`section` with the most paragraphs wins; failing that,
//! the body. Greedy and single-pass: deterministic for a given tree, not
//! guaranteed optimal.

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::selector::{query_all, utils};

/// Article-body selectors in priority order
/// First qualifying match wins - check in order
pub static CONTAINER_SELECTORS: &[&str] = &[
    "article",
    "main",
    r#"[role="main"]"#,
    ".post-content",
    ".article-content",
    ".content-body",
    ".topic-content",
    ".entry-content",
    // WeChat official-account articles
    "#js_content",
];

/// How the main container was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStrategy {
    /// The first element matching this selector had enough text.
    Selector(&'static str),
    /// The `div`/`section` with the most `p` descendants.
    ParagraphDensity { paragraphs: usize },
    /// Nothing qualified; the document body is used.
    Body,
}

/// The node chosen as the traversal root, with the reason it was chosen.
#[derive(Debug, Clone, Copy)]
pub struct MainContainer<'a> {
    pub node: NodeRef<'a>,
    pub strategy: ContainerStrategy,
}

/// Locate the main content container of `doc`.
///
/// `min_text_len` is the rendered text length (in characters) a
/// selector-matched element must exceed.
#[must_use]
pub fn locate_main_container(doc: &Document, min_text_len: usize) -> MainContainer<'_> {
    for &selector in CONTAINER_SELECTORS {
        let Some(node) = doc.select(selector).nodes().first().copied() else {
            continue;
        };
        let text_len = dom::rendered_text(&node).chars().count();
        if text_len > min_text_len {
            log::debug!("main container: selector {selector:?} ({text_len} chars)");
            return MainContainer {
                node,
                strategy: ContainerStrategy::Selector(selector),
            };
        }
        log::trace!("selector {selector:?} matched but only {text_len} chars");
    }

    let body = dom::body(doc);
    if let Some((node, paragraphs)) = densest_paragraph_container(&doc.root()) {
        log::debug!("main container: paragraph density ({paragraphs} paragraphs)");
        return MainContainer {
            node,
            strategy: ContainerStrategy::ParagraphDensity { paragraphs },
        };
    }

    log::debug!("main container: falling back to body");
    MainContainer {
        node: body,
        strategy: ContainerStrategy::Body,
    }
}

fn is_div_or_section(node: &NodeRef) -> bool {
    utils::is_one_of_tags(node, &["div", "section"])
}

fn is_paragraph(node: &NodeRef) -> bool {
    utils::is_one_of_tags(node, &["p"])
}

/// The `div`/`section` under `root` with the most `p` descendants.
///
/// Ties keep the first in document order; `None` when no candidate holds
/// any paragraph.
fn densest_paragraph_container<'a>(root: &NodeRef<'a>) -> Option<(NodeRef<'a>, usize)> {
    let mut best: Option<(NodeRef<'a>, usize)> = None;

    for candidate in query_all(root, is_div_or_section) {
        let count = query_all(&candidate, is_paragraph).len();
        if count > best.as_ref().map_or(0, |(_, c)| *c) {
            best = Some((candidate, count));
        }
    }

    best
}
