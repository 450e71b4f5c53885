//! URL Utility Functions
//!
//! Link and image URL normalization. Only values that end up starting with
//! `http` are ever emitted; everything else is dropped by the callers.

use url::Url;

/// Whether `s` counts as a web URL for extraction purposes.
///
/// A plain prefix test: `https://…`, `http://…` and anything else starting
/// with `http` pass.
#[inline]
#[must_use]
pub fn is_http(s: &str) -> bool {
    s.starts_with("http")
}

/// Rewrite a protocol-relative `//host/path` URL to explicit `https:`.
///
/// Returns `None` for values that are not protocol-relative.
#[must_use]
pub fn upgrade_protocol_relative(s: &str) -> Option<String> {
    s.starts_with("//").then(|| format!("https:{s}"))
}

/// Resolve an anchor `href` the way a browser's resolved `href` property
/// would, then keep it only if it is an `http` URL.
///
/// Without a base URL, relative hrefs cannot be resolved and are dropped.
#[must_use]
pub fn resolve_link(href: &str, base: Option<&Url>) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    // Special schemes never become links
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Absolute only when it parses with a web scheme; `http-guide.html`
    // is a relative path.
    if Url::parse(href).is_ok_and(|url| matches!(url.scheme(), "http" | "https")) {
        return Some(href.to_string());
    }

    let resolved = base?.join(href).ok()?;
    let resolved = resolved.as_str();
    is_http(resolved).then(|| resolved.to_string())
}
