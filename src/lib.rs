//! # page-clipper
//!
//! Turns a rendered web page into an ordered list of content items and
//! from there into rich-text blocks for a page-based notes service.
//!
//! Extraction locates the page's main content container, walks it in
//! document order, and emits headings, paragraphs of formatted runs, quotes,
//! list items, images and tables while skipping chrome such as navigation,
//! comments, sharing widgets and hidden elements.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_clipper::{extract, ContentItem};
//!
//! let html = r#"<html><body>
//!     <nav>Home | About</nav>
//!     <h2>Release notes</h2>
//!     <p>Version <b>2.0</b> is out.</p>
//! </body></html>"#;
//!
//! let items = extract(html);
//! assert_eq!(items[0], ContentItem::Heading { level: 2, text: "Release notes".into() });
//! assert!(items[1].is_paragraph());
//! ```
//!
//! ## Blocks
//!
//! ```rust
//! use page_clipper::{extract_blocks, Block, Options};
//!
//! let blocks = extract_blocks("<h1>Title</h1><p>Text</p>", &Options::default());
//! assert_eq!(blocks[0].kind(), "heading_1");
//! assert!(matches!(blocks[1], Block::Paragraph(_)));
//! ```
//!
//! Extraction never fails: malformed markup is parsed leniently and a page
//! with nothing recognizable yields an empty list.

mod error;
mod extract;
mod options;
mod patterns;

/// Tree access helpers over `dom_query`.
pub mod dom;

/// Main container location and noise classification.
pub mod selector;

/// The document walker and its image/table helpers.
pub mod extractor;

/// Content items: the extractor's output model.
pub mod content;

/// Conversion of content items to page blocks.
pub mod blocks;

/// Create-page payload assembly.
pub mod page;

/// Request/response contract of the extraction channel.
pub mod message;

/// URL checks and resolution.
pub mod url_utils;

/// Character encoding detection for byte input.
pub mod encoding;

// Public API - re-exports
pub use blocks::{convert, convert_all, Block, RichText, TableBlock};
pub use content::{Cell, ContentItem, RichRun, Row};
pub use dom::Document;
pub use error::{Error, Result};
pub use message::{handle_request, respond_json, Request, Response};
pub use options::{BlockBoundaries, Options};
pub use page::{PagePayload, PageTarget};

/// Extract content items from an HTML snapshot using default options.
///
/// # Example
///
/// ```rust
/// use page_clipper::extract;
///
/// let items = extract("<html><body><p>Hello</p></body></html>");
/// assert_eq!(items.len(), 1);
/// ```
#[must_use]
pub fn extract(html: &str) -> Vec<ContentItem> {
    extract_with_options(html, &Options::default())
}

/// Extract content items from an HTML snapshot with custom options.
///
/// # Example
///
/// ```rust
/// use page_clipper::{extract_with_options, ContentItem, Options};
///
/// let options = Options {
///     base_url: Some("https://example.com/posts/".to_string()),
///     ..Options::default()
/// };
/// let items = extract_with_options(r#"<p><a href="next">More</a></p>"#, &options);
///
/// let ContentItem::Paragraph { runs } = &items[0] else { unreachable!() };
/// assert_eq!(runs[0].link.as_deref(), Some("https://example.com/posts/next"));
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> Vec<ContentItem> {
    extract::extract_content(html, options)
}

/// Extract content items from an already parsed document.
#[must_use]
pub fn extract_document(document: &Document, options: &Options) -> Vec<ContentItem> {
    extract::extract_from_document(document, options)
}

/// Extract content items from HTML bytes with automatic encoding detection.
///
/// The encoding is taken from a byte-order mark, then from a
/// `<meta charset>` or `http-equiv` declaration, and defaults to UTF-8.
/// Invalid sequences are replaced with U+FFFD rather than rejected.
///
/// # Example
///
/// ```rust
/// use page_clipper::{extract_bytes, ContentItem};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let items = extract_bytes(html);
///
/// let ContentItem::Paragraph { runs } = &items[0] else { unreachable!() };
/// assert_eq!(runs[0].text, "Caf\u{e9}");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> Vec<ContentItem> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extract content items from HTML bytes with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Vec<ContentItem> {
    let html = encoding::decode_snapshot(html);
    extract_with_options(&html, options)
}

/// Extract content items and convert them to blocks in one step.
#[must_use]
pub fn extract_blocks(html: &str, options: &Options) -> Vec<Block> {
    convert_all(&extract_with_options(html, options))
}
