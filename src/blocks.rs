//! Destination blocks and the content-item converter.
//!
//! `Block` mirrors the destination's block vocabulary and serializes to its
//! JSON shape:
//!
//! ```json
//! {"object": "block", "type": "heading_2", "heading_2": {"rich_text": [...]}}
//! ```
//!
//! Conversion is one item to at most one block, order-preserving and pure,
//! so converting the same sequence twice yields the same blocks and a caller
//! truncating the result keeps the earliest content.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::content::{Cell, ContentItem, RichRun};

/// Longest text content the destination accepts in one rich-text object.
pub const MAX_RICH_TEXT_LEN: usize = 2000;

/// Table width used when an incoming table reports none.
pub const DEFAULT_TABLE_WIDTH: usize = 2;

/// One rich-text object of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub content: String,
    pub link: Option<String>,
    pub bold: bool,
}

impl RichText {
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

/// A table block's contents. Every row holds exactly `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub width: usize,
    pub has_column_header: bool,
    pub has_row_header: bool,
    /// Rows of cells; each cell is its own rich-text sequence.
    pub rows: Vec<Vec<Vec<RichText>>>,
}

/// A block of the destination schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading1(Vec<RichText>),
    Heading2(Vec<RichText>),
    Heading3(Vec<RichText>),
    Paragraph(Vec<RichText>),
    /// Externally hosted image.
    Image(String),
    BulletedListItem(Vec<RichText>),
    Quote(Vec<RichText>),
    Table(TableBlock),
    Callout { rich_text: Vec<RichText>, emoji: String },
    Divider,
}

impl Block {
    /// The destination's `type` name for this block.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading1(_) => "heading_1",
            Self::Heading2(_) => "heading_2",
            Self::Heading3(_) => "heading_3",
            Self::Paragraph(_) => "paragraph",
            Self::Image(_) => "image",
            Self::BulletedListItem(_) => "bulleted_list_item",
            Self::Quote(_) => "quote",
            Self::Table(_) => "table",
            Self::Callout { .. } => "callout",
            Self::Divider => "divider",
        }
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Convert one content item into its block, if it has one.
///
/// Never fails: unknown items convert to `None`, empty tables to `None`,
/// stray break markers to a divider.
#[must_use]
pub fn convert(item: &ContentItem) -> Option<Block> {
    match item {
        ContentItem::Heading { level, text } => Some(heading_block(*level, text)),
        ContentItem::Paragraph { runs } => Some(Block::Paragraph(paragraph_rich_text(runs))),
        ContentItem::Image { url } => Some(Block::Image(url.clone())),
        ContentItem::ListItem { text } => Some(Block::BulletedListItem(split_rich_text(text, false, None))),
        ContentItem::Quote { text } => Some(Block::Quote(split_rich_text(text, false, None))),
        ContentItem::Table { width, rows } => table_block(*width, rows).map(Block::Table),
        ContentItem::Break => Some(Block::Divider),
        ContentItem::Unknown => None,
    }
}

/// Convert a whole sequence, in order, dropping items without a block.
#[must_use]
pub fn convert_all(items: &[ContentItem]) -> Vec<Block> {
    items.iter().filter_map(convert).collect()
}

fn heading_block(level: u8, text: &str) -> Block {
    match level {
        0 | 1 => Block::Heading1(split_rich_text(text, false, None)),
        2 => Block::Heading2(split_rich_text(text, false, None)),
        3 => Block::Heading3(split_rich_text(text, false, None)),
        _ => Block::Paragraph(split_rich_text(text, true, None)),
    }
}

fn paragraph_rich_text(runs: &[RichRun]) -> Vec<RichText> {
    runs.iter()
        .flat_map(|run| split_rich_text(&run.text, run.bold, run.link.as_deref()))
        .collect()
}

fn table_block(width: usize, rows: &[Vec<Cell>]) -> Option<TableBlock> {
    if rows.is_empty() {
        return None;
    }

    let width = if width == 0 { DEFAULT_TABLE_WIDTH } else { width };
    let longest = rows.iter().map(Vec::len).max().unwrap_or(0);
    if longest > width {
        log::debug!("table width {width} widened to longest row ({longest} cells)");
    }
    let width = width.max(longest);
    let rows = rows
        .iter()
        .map(|row| {
            let mut cells: Vec<Vec<RichText>> = row
                .iter()
                .map(|cell| split_rich_text(&cell.text, cell.bold, None))
                .collect();
            cells.resize_with(width, || vec![RichText::plain("")]);
            cells
        })
        .collect();

    Some(TableBlock {
        width,
        has_column_header: true,
        has_row_header: false,
        rows,
    })
}

/// Rich text for `text`, split into consecutive objects of at most
/// `MAX_RICH_TEXT_LEN` characters sharing the same annotations.
///
/// Always yields at least one object, empty text included.
#[must_use]
pub fn split_rich_text(text: &str, bold: bool, link: Option<&str>) -> Vec<RichText> {
    let make = |content: String| RichText {
        content,
        link: link.map(str::to_string),
        bold,
    };

    if text.chars().count() <= MAX_RICH_TEXT_LEN {
        return vec![make(text.to_string())];
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(MAX_RICH_TEXT_LEN)
        .map(|chunk| make(chunk.iter().collect()))
        .collect()
}

// =============================================================================
// Serialization
// =============================================================================

#[derive(Serialize)]
struct LinkWire<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct TextWire<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<LinkWire<'a>>,
}

#[derive(Serialize)]
struct Annotations {
    bold: bool,
}

#[derive(Serialize)]
struct RichTextWire<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextWire<'a>,
    annotations: Annotations,
}

impl Serialize for RichText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RichTextWire {
            kind: "text",
            text: TextWire {
                content: &self.content,
                link: self.link.as_deref().map(|url| LinkWire { url }),
            },
            annotations: Annotations { bold: self.bold },
        }
        .serialize(serializer)
    }
}

#[derive(Serialize)]
struct RichTextBody<'a> {
    rich_text: &'a [RichText],
}

#[derive(Serialize)]
struct ExternalUrl<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct ImageBody<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    external: ExternalUrl<'a>,
}

#[derive(Serialize)]
struct Emoji<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    emoji: &'a str,
}

#[derive(Serialize)]
struct CalloutBody<'a> {
    rich_text: &'a [RichText],
    icon: Emoji<'a>,
}

#[derive(Serialize)]
struct TableRowCells<'a> {
    cells: &'a [Vec<RichText>],
}

#[derive(Serialize)]
struct TableRowWire<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    table_row: TableRowCells<'a>,
}

#[derive(Serialize)]
struct TableBody<'a> {
    table_width: usize,
    has_column_header: bool,
    has_row_header: bool,
    children: Vec<TableRowWire<'a>>,
}

#[derive(Serialize)]
struct EmptyBody {}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", kind)?;

        match self {
            Self::Heading1(rich_text)
            | Self::Heading2(rich_text)
            | Self::Heading3(rich_text)
            | Self::Paragraph(rich_text)
            | Self::BulletedListItem(rich_text)
            | Self::Quote(rich_text) => {
                map.serialize_entry(kind, &RichTextBody { rich_text })?;
            }
            Self::Image(url) => {
                map.serialize_entry(
                    kind,
                    &ImageBody {
                        kind: "external",
                        external: ExternalUrl { url },
                    },
                )?;
            }
            Self::Table(table) => {
                let children = table
                    .rows
                    .iter()
                    .map(|cells| TableRowWire {
                        kind: "table_row",
                        table_row: TableRowCells { cells },
                    })
                    .collect();
                map.serialize_entry(
                    kind,
                    &TableBody {
                        table_width: table.width,
                        has_column_header: table.has_column_header,
                        has_row_header: table.has_row_header,
                        children,
                    },
                )?;
            }
            Self::Callout { rich_text, emoji } => {
                map.serialize_entry(
                    kind,
                    &CalloutBody {
                        rich_text,
                        icon: Emoji {
                            kind: "emoji",
                            emoji,
                        },
                    },
                )?;
            }
            Self::Divider => map.serialize_entry(kind, &EmptyBody {})?,
        }

        map.end()
    }
}
