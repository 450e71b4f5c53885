//! Create-page payload assembly.
//!
//! The page is submitted by the caller; this module only builds the body:
//! a source-link callout and a divider ahead of the converted blocks, the
//! whole list capped at `Options::max_blocks`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::blocks::{split_rich_text, Block};
use crate::error::{Error, Result};
use crate::Options;

/// Icon of the leading source-link callout.
pub const SOURCE_LINK_EMOJI: &str = "🔗";

/// Database a page is created in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    pub database_id: String,
    /// Name of the database's title property.
    pub title_property: String,
}

impl PageTarget {
    #[must_use]
    pub fn new(database_id: impl Into<String>, title_property: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
            title_property: title_property.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parent {
    pub database_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleText {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleFragment {
    pub text: TitleText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleProperty {
    pub title: Vec<TitleFragment>,
}

/// Body of a create-page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagePayload {
    pub parent: Parent,
    pub properties: BTreeMap<String, TitleProperty>,
    pub children: Vec<Block>,
}

impl PagePayload {
    /// Assemble the payload for `blocks` captured from `source_url`.
    ///
    /// Children are the two bookkeeping blocks followed by `blocks`,
    /// truncated to `options.max_blocks` entries in total.
    #[must_use]
    pub fn build(
        target: &PageTarget,
        title: &str,
        source_url: &str,
        blocks: Vec<Block>,
        options: &Options,
    ) -> Self {
        let mut children = bookkeeping_blocks(source_url, &options.source_link_label);
        children.extend(blocks);

        if children.len() > options.max_blocks {
            log::debug!(
                "truncating page children from {} to {}",
                children.len(),
                options.max_blocks
            );
            children.truncate(options.max_blocks);
        }

        let title_property = TitleProperty {
            title: split_rich_text(title, false, None)
                .into_iter()
                .map(|part| TitleFragment {
                    text: TitleText {
                        content: part.content,
                    },
                })
                .collect(),
        };

        Self {
            parent: Parent {
                database_id: target.database_id.clone(),
            },
            properties: BTreeMap::from([(target.title_property.clone(), title_property)]),
            children,
        }
    }

    /// Encode the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Serialization)
    }
}

/// The source-link callout and the divider placed ahead of page content.
#[must_use]
pub fn bookkeeping_blocks(source_url: &str, label: &str) -> Vec<Block> {
    vec![
        Block::Callout {
            rich_text: split_rich_text(&format!("{label}: {source_url}"), false, None),
            emoji: SOURCE_LINK_EMOJI.to_string(),
        },
        Block::Divider,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{RichText, MAX_RICH_TEXT_LEN};
    use serde_json::json;

    fn paragraphs(n: usize) -> Vec<Block> {
        (0..n)
            .map(|i| Block::Paragraph(vec![RichText::plain(format!("p{i}"))]))
            .collect()
    }

    #[test]
    fn test_bookkeeping_blocks_lead() {
        let target = PageTarget::new("db-1", "Name");
        let payload = PagePayload::build(&target, "T", "https://x.com/a", paragraphs(1), &Options::default());

        assert_eq!(payload.children.len(), 3);
        assert_eq!(
            payload.children[0],
            Block::Callout {
                rich_text: vec![RichText::plain("Original link: https://x.com/a")],
                emoji: "🔗".to_string(),
            }
        );
        assert_eq!(payload.children[1], Block::Divider);
    }

    #[test]
    fn test_truncates_total_to_max_blocks() {
        let target = PageTarget::new("db-1", "Name");
        let payload = PagePayload::build(&target, "T", "https://x.com", paragraphs(150), &Options::default());

        assert_eq!(payload.children.len(), 100);
        // Earliest content survives
        assert_eq!(payload.children[2], Block::Paragraph(vec![RichText::plain("p0")]));
        assert_eq!(payload.children[99], Block::Paragraph(vec![RichText::plain("p97")]));
    }

    #[test]
    fn test_custom_label_and_limit() {
        let options = Options {
            source_link_label: "原文链接".to_string(),
            max_blocks: 2,
            ..Options::default()
        };
        let target = PageTarget::new("db-1", "Name");
        let payload = PagePayload::build(&target, "T", "https://x.com", paragraphs(5), &options);

        assert_eq!(payload.children.len(), 2);
        let Block::Callout { rich_text, .. } = &payload.children[0] else {
            panic!("expected callout");
        };
        assert_eq!(rich_text[0].content, "原文链接: https://x.com");
    }

    #[test]
    fn test_payload_json_shape() {
        let target = PageTarget::new("db-42", "Title");
        let payload = PagePayload::build(&target, "My page", "https://x.com", Vec::new(), &Options::default());
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(value["parent"], json!({"database_id": "db-42"}));
        assert_eq!(
            value["properties"],
            json!({"Title": {"title": [{"text": {"content": "My page"}}]}})
        );
        assert_eq!(value["children"][1], json!({"object": "block", "type": "divider", "divider": {}}));
    }

    #[test]
    fn test_long_source_url_and_title_are_split() {
        let target = PageTarget::new("db-1", "Name");
        let source_url = format!("https://x.com/?q={}", "a".repeat(2500));
        let title = "t".repeat(MAX_RICH_TEXT_LEN + 10);
        let payload = PagePayload::build(&target, &title, &source_url, Vec::new(), &Options::default());

        let Block::Callout { rich_text, .. } = &payload.children[0] else {
            panic!("expected callout");
        };
        assert_eq!(rich_text.len(), 2);
        assert!(rich_text.iter().all(|r| r.content.chars().count() <= MAX_RICH_TEXT_LEN));
        assert_eq!(
            rich_text.iter().map(|r| r.content.as_str()).collect::<String>(),
            format!("Original link: {source_url}")
        );

        let fragments = &payload.properties["Name"].title;
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[1].text.content, "t".repeat(10));
    }
}
