//! Compiled regex patterns used by the extraction heuristics.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Boilerplate Detection
// =============================================================================

/// Substrings of a lowercased id/class marking an element as boilerplate.
///
/// Matched anywhere in the attribute value, so `article-header` and
/// `navigation` are noise just like `header` and `nav`.
pub static NOISE_KEYWORDS: &[&str] = &[
    "comment",
    "reply",
    "footer",
    "header",
    "nav",
    "sidebar",
    "recommend",
    "related",
    "advert",
    "promo",
    "copyright",
    "share",
    "social",
    "tags",
    "author-info",
    "login-modal",
    // Site-specific chrome (CSDN, cnblogs and similar blog platforms)
    "csdn-side-toolbar",
    "template-box",
    "blog_footer_bottom",
    "post_comment",
    "post_related",
    "reward-user",
    "praise",
];

/// Alternation of every `NOISE_KEYWORDS` entry.
pub static NOISE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = NOISE_KEYWORDS
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("NOISE_PATTERN regex")
});

// =============================================================================
// Inline Style Patterns
// =============================================================================

/// Inline declarations that take an element out of rendering.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|;)\s*(?:display\s*:\s*none|visibility\s*:\s*(?:hidden|collapse))\s*(?:!\s*important\s*)?(?:;|$)",
    )
    .expect("HIDDEN_STYLE regex")
});

/// Inline `font-weight` declarations that render as bold.
pub static BOLD_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|;)\s*font-weight\s*:\s*(?:bold|bolder|[6-9]00)\s*(?:!\s*important\s*)?(?:;|$)",
    )
    .expect("BOLD_STYLE regex")
});

// =============================================================================
// Charset Declarations
// =============================================================================

/// `<meta charset=...>` (group 1) or an `http-equiv` content type carrying
/// `charset=...` (group 2).
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta\s[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)|<meta\s[^>]*?content\s*=\s*["'][^"']*?charset\s*=\s*([a-z0-9_:.\-]+)"#,
    )
    .expect("META_CHARSET regex")
});

// =============================================================================
// Text Normalization
// =============================================================================

/// Any run of whitespace, newlines included.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));
