//! Selector Infrastructure
//!
//! Rules are simple predicates over a node. The noise classifier and the
//! main-container locator are built from them.

use dom_query::NodeRef;

pub mod container;
pub mod noise;
pub mod utils;

pub use container::{locate_main_container, ContainerStrategy, MainContainer};
pub use noise::{is_noise, is_noise_with};

/// A selector rule that tests if a node matches certain criteria
pub type Rule = fn(&NodeRef) -> bool;

/// Query for all descendant elements matching the rule, in document order
///
/// `root` itself is not tested.
///
/// # Example
///
/// ```rust
/// use page_clipper::selector::{self, utils};
/// use page_clipper::dom;
///
/// let doc = dom::parse(r#"<div><p class="content">a</p><p>b</p><p class="content">c</p></div>"#);
/// let root = dom::body(&doc);
///
/// fn has_content_class(node: &dom::NodeRef) -> bool {
///     utils::class(node).contains("content")
/// }
///
/// assert_eq!(selector::query_all(&root, has_content_class).len(), 2);
/// ```
#[must_use]
pub fn query_all<'a>(root: &NodeRef<'a>, rule: Rule) -> Vec<NodeRef<'a>> {
    root.descendants()
        .into_iter()
        .filter(|node| node.is_element() && rule(node))
        .collect()
}
