//! Noise classification
//!
//! An element is noise when its lowercased `id` or `class` contains any
//! denylisted keyword. Matching is plain substring, not whole-word: a class
//! of `article-header` is excluded just like `header`.

use dom_query::NodeRef;

use crate::patterns::NOISE_PATTERN;
use crate::selector::utils::{class, id};

/// Whether the element's subtree is boilerplate and must be skipped.
#[must_use]
pub fn is_noise(node: &NodeRef) -> bool {
    is_noise_with(node, &[])
}

/// Like [`is_noise`], also matching caller-supplied keywords.
///
/// Extra keywords are compared case-insensitively; empty keywords are
/// ignored.
#[must_use]
pub fn is_noise_with(node: &NodeRef, extra_keywords: &[String]) -> bool {
    if !node.is_element() {
        return false;
    }

    let id = id(node).to_lowercase();
    let class = class(node).to_lowercase();

    if NOISE_PATTERN.is_match(&id) || NOISE_PATTERN.is_match(&class) {
        return true;
    }

    extra_keywords
        .iter()
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .any(|kw| id.contains(&kw) || class.contains(&kw))
}
