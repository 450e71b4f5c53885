//! Content items produced by a walk.
//!
//! These are the typed, ordered units handed to the block converter and
//! carried over the message channel. Their serde shape is the channel's wire
//! format: items are tagged by `type`, and text payloads travel as `value`.

use serde::{Deserialize, Serialize};

/// A contiguous span of paragraph text sharing one formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichRun {
    pub text: String,

    #[serde(default)]
    pub bold: bool,

    /// Absolute `http(s)` URL of the enclosing anchor. Serialized as `null`
    /// when absent.
    #[serde(default)]
    pub link: Option<String>,
}

impl RichRun {
    #[must_use]
    pub fn new(text: impl Into<String>, bold: bool, link: Option<String>) -> Self {
        Self {
            text: text.into(),
            bold,
            link,
        }
    }

    /// Unformatted run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false, None)
    }
}

/// One table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,

    #[serde(default)]
    pub bold: bool,
}

/// One table row, cells in document order.
pub type Row = Vec<Cell>;

/// One semantic unit extracted from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// Block-boundary marker. Never present in a finished walk; converts to
    /// a divider if one arrives over the wire.
    Break,

    /// `h1`-`h3`. Deeper headings become bold paragraphs instead.
    Heading {
        #[serde(default)]
        level: u8,
        #[serde(rename = "value", default)]
        text: String,
    },

    /// Inline text, never empty.
    Paragraph {
        #[serde(rename = "rich_text", default)]
        runs: Vec<RichRun>,
    },

    Quote {
        #[serde(rename = "value", default)]
        text: String,
    },

    /// List item text; inline formatting is not preserved.
    ListItem {
        #[serde(rename = "value", default)]
        text: String,
    },

    Image {
        #[serde(rename = "value")]
        url: String,
    },

    /// `width` is the largest cell count of any row; never emitted without
    /// rows.
    Table {
        #[serde(rename = "table_width", default)]
        width: usize,
        #[serde(default)]
        rows: Vec<Row>,
    },

    /// Any item type this crate does not know. Converts to nothing.
    #[serde(other)]
    Unknown,
}

impl ContentItem {
    #[must_use]
    pub fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }

    #[must_use]
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Self::Paragraph { .. })
    }
}
