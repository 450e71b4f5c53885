//! Configuration options for extraction and block assembly.
//!
//! The `Options` struct controls the heuristics' thresholds, the traversal
//! budget and the shape of the assembled page payload.

use url::Url;

use crate::Result;

/// How block-level element boundaries affect an open paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockBoundaries {
    /// Entering or leaving a block-level element closes the open paragraph,
    /// so text in sibling blocks lands in separate paragraphs.
    #[default]
    CloseParagraph,

    /// Boundaries are ignored; only a non-paragraph item closes a paragraph.
    /// Text in sibling blocks with nothing terminal in between merges into
    /// one paragraph.
    Ignore,
}

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use page_clipper::{BlockBoundaries, Options};
///
/// let options = Options {
///     base_url: Some("https://example.com/posts/1".to_string()),
///     block_boundaries: BlockBoundaries::Ignore,
///     ..Options::default()
/// };
/// assert_eq!(options.max_blocks, 100);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Rendered text length a selector-matched container must exceed to be
    /// accepted as the main container.
    ///
    /// Default: `300`
    pub min_container_text_len: usize,

    /// Additional id/class substrings treated as noise, matched
    /// case-insensitively on top of the built-in denylist.
    ///
    /// Default: empty
    pub extra_noise_keywords: Vec<String>,

    /// URL of the page the snapshot was taken from.
    ///
    /// When set, relative anchor hrefs are resolved against it before the
    /// `http` prefix check.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Paragraph segmentation policy at block-level boundaries.
    ///
    /// Default: `BlockBoundaries::CloseParagraph`
    pub block_boundaries: BlockBoundaries,

    /// Deepest element nesting the walker descends into. Subtrees below
    /// this depth are skipped.
    ///
    /// Default: `512`
    pub max_tree_depth: usize,

    /// Maximum number of nodes visited in one walk. The walk stops and
    /// returns what it has once the budget is spent.
    ///
    /// Default: `200_000`
    pub max_nodes: usize,

    /// Ceiling on the number of children in an assembled page payload,
    /// bookkeeping blocks included.
    ///
    /// Default: `100`
    pub max_blocks: usize,

    /// Label placed before the source URL in the leading callout block.
    ///
    /// Default: `"Original link"`
    pub source_link_label: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_container_text_len: 300,
            extra_noise_keywords: Vec::new(),
            base_url: None,
            block_boundaries: BlockBoundaries::CloseParagraph,
            max_tree_depth: 512,
            max_nodes: 200_000,
            max_blocks: 100,
            source_link_label: "Original link".to_string(),
        }
    }
}

impl Options {
    /// Parse `base_url`, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` when `base_url` is set but not an
    /// absolute URL.
    pub fn parsed_base_url(&self) -> Result<Option<Url>> {
        match self.base_url.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(Url::parse(raw)?)),
        }
    }
}
