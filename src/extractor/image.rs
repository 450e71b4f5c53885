//! Image source resolution.
//!
//! Lazy-loading pages park the real URL in a data attribute and put a
//! placeholder in `src`, so data attributes are checked first.

use dom_query::NodeRef;

use crate::dom;
use crate::url_utils::{is_http, upgrade_protocol_relative};

/// Attributes checked for an image URL, in priority order.
pub static IMAGE_SOURCE_ATTRIBUTES: [&str; 5] =
    ["data-original", "data-src", "data-actualsrc", "src", "srcset"];

/// Best usable URL for an `img` element, if any attribute yields one.
#[must_use]
pub fn resolve_image_url(node: &NodeRef) -> Option<String> {
    let found = IMAGE_SOURCE_ATTRIBUTES
        .iter()
        .filter_map(|name| dom::attr(node, name))
        .find_map(|value| accept_candidate(&value));

    if found.is_none() {
        log::trace!("image dropped: no usable source attribute");
    }
    found
}

/// First whitespace-separated token of an attribute value, accepted when it
/// is an `http` URL or protocol-relative.
///
/// For `srcset` values this drops width/density descriptors and any
/// trailing candidate separator.
fn accept_candidate(raw: &str) -> Option<String> {
    let first = raw.split_whitespace().next()?.trim_end_matches(',');

    if is_http(first) {
        return Some(first.to_string());
    }
    upgrade_protocol_relative(first)
}
