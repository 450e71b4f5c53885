//! Utility functions for selector pattern matching
//!
//! Attribute helpers return empty strings for missing attributes so rules
//! can chain string tests without unwrapping.

use dom_query::NodeRef;

use crate::dom;

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> String {
    attr(node, "id")
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(node: &NodeRef) -> String {
    attr(node, "class")
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> String {
    dom::attr(node, name).map(|v| v.to_string()).unwrap_or_default()
}

/// Get tag name (empty string for non-elements)
#[inline]
#[must_use]
pub fn tag(node: &NodeRef) -> String {
    dom::tag_name(node).unwrap_or_default()
}

/// Check if the node is an element with one of the given tag names
#[must_use]
pub fn is_one_of_tags(node: &NodeRef, tags: &[&str]) -> bool {
    dom::tag_name(node).is_some_and(|t| tags.contains(&t.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attributes_are_empty() {
        let doc = dom::parse("<div>plain</div>");
        let div = *doc.select("div").nodes().first().unwrap();

        assert_eq!(id(&div), "");
        assert_eq!(class(&div), "");
        assert_eq!(attr(&div, "data-x"), "");
        assert_eq!(tag(&div), "div");
    }

    #[test]
    fn test_is_one_of_tags() {
        let doc = dom::parse("<section><p>x</p></section>");
        let section = *doc.select("section").nodes().first().unwrap();

        assert!(is_one_of_tags(&section, &["div", "section"]));
        assert!(!is_one_of_tags(&section, &["p"]));
    }
}
