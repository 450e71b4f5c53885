//! Document walker.
//!
//! Depth-first, pre-order traversal of one subtree producing the ordered
//! content-item sequence. The traversal uses an explicit stack, so nesting
//! depth never touches the call stack, and carries the inline formatting
//! (`bold`, `link`) down to text nodes instead of rescanning ancestors.
//!
//! Per element, in order:
//! 1. hidden or structurally non-content elements are skipped with their subtree
//! 2. noise elements are skipped with their subtree
//! 3. block-level elements are boundaries on entry and on exit
//! 4. `table`, `h1`-`h3`, `blockquote`, `li` and `img` are terminal
//! 5. everything else recurses into its children
//!
//! Text nodes become rich runs of the open paragraph.

use dom_query::NodeRef;
use url::Url;

use crate::content::{ContentItem, RichRun};
use crate::dom;
use crate::extractor::image::resolve_image_url;
use crate::extractor::state::ContentSink;
use crate::extractor::table::extract_table;
use crate::extractor::tags;
use crate::patterns::WHITESPACE_RUN;
use crate::selector::is_noise_with;
use crate::url_utils::resolve_link;
use crate::Options;

/// Inline formatting in effect for a subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Format {
    bold: bool,
    link: Option<String>,
}

struct Frame<'a> {
    node: NodeRef<'a>,
    depth: usize,
    format: Format,
}

enum Step<'a> {
    Enter(Frame<'a>),
    /// Exit boundary of a block-level element.
    Leave,
}

/// Walks subtrees with one set of options.
pub struct Walker<'o> {
    options: &'o Options,
    base_url: Option<Url>,
}

impl<'o> Walker<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        let base_url = options.parsed_base_url().unwrap_or_else(|err| {
            log::warn!("ignoring base URL {:?}: {err}", options.base_url);
            None
        });
        Self { options, base_url }
    }

    /// Walk the subtree rooted at `root`.
    ///
    /// `root` is treated as the main container: its own tag never
    /// contributes bold or link formatting to the text beneath it.
    #[must_use]
    pub fn walk(&self, root: &NodeRef) -> Vec<ContentItem> {
        let mut sink = ContentSink::new(self.options.block_boundaries);
        let mut stack = vec![Step::Enter(Frame {
            node: *root,
            depth: 0,
            format: Format::default(),
        })];
        let mut visited = 0usize;

        while let Some(step) = stack.pop() {
            let frame = match step {
                Step::Leave => {
                    sink.boundary();
                    continue;
                }
                Step::Enter(frame) => frame,
            };

            visited += 1;
            if visited > self.options.max_nodes {
                log::warn!(
                    "node budget of {} exhausted; returning {} items",
                    self.options.max_nodes,
                    sink.len()
                );
                break;
            }

            if frame.node.is_text() {
                visit_text(&frame, &mut sink);
                continue;
            }

            let Some(tag) = dom::tag_name(&frame.node) else {
                continue;
            };

            if tags::is_skipped_tag(&tag) || dom::is_hidden(&frame.node) {
                continue;
            }
            if is_noise_with(&frame.node, &self.options.extra_noise_keywords) {
                log::trace!("skipping noise <{tag}>");
                continue;
            }

            if tags::is_block_tag(&tag) {
                sink.boundary();
                stack.push(Step::Leave);
            }

            if visit_terminal(&tag, &frame.node, &mut sink) {
                continue;
            }

            if frame.depth >= self.options.max_tree_depth {
                log::warn!(
                    "depth ceiling {} reached at <{tag}>; subtree skipped",
                    self.options.max_tree_depth
                );
                continue;
            }

            let format = if frame.depth == 0 {
                frame.format
            } else {
                self.child_format(&tag, &frame.node, frame.format)
            };
            for child in frame.node.children().into_iter().rev() {
                stack.push(Step::Enter(Frame {
                    node: child,
                    depth: frame.depth + 1,
                    format: format.clone(),
                }));
            }
        }

        sink.finish()
    }

    /// Formatting for the children of `node`.
    fn child_format(&self, tag: &str, node: &NodeRef, mut format: Format) -> Format {
        if tags::is_bold_tag(tag) {
            format.bold = true;
        }
        if tag == "a" {
            if let Some(link) = dom::attr(node, "href")
                .and_then(|href| resolve_link(&href, self.base_url.as_ref()))
            {
                format.link = Some(link);
            }
        }
        format
    }
}

/// Emit the item for a terminal element.
///
/// Returns `true` when the element is terminal, whether or not it
/// produced an item; its children must not be walked.
fn visit_terminal(tag: &str, node: &NodeRef, sink: &mut ContentSink) -> bool {
    if let Some(level) = tags::heading_level(tag) {
        push_text_item(sink, dom::rendered_text(node), |text| ContentItem::Heading {
            level,
            text,
        });
        return true;
    }

    match tag {
        "table" => {
            if let Some(table) = extract_table(node) {
                sink.push_item(table);
            }
        }
        "blockquote" => {
            push_text_item(sink, dom::rendered_text(node), |text| ContentItem::Quote { text });
        }
        "li" => {
            push_text_item(sink, dom::rendered_text(node), |text| ContentItem::ListItem { text });
        }
        "img" => {
            if let Some(url) = resolve_image_url(node) {
                sink.push_item(ContentItem::Image { url });
            }
        }
        _ => return false,
    }
    true
}

fn visit_text(frame: &Frame, sink: &mut ContentSink) {
    let raw = frame.node.text();
    if raw.trim().is_empty() {
        return;
    }

    let text = WHITESPACE_RUN.replace_all(&raw, " ").into_owned();
    sink.push_run(RichRun::new(text, frame.format.bold, frame.format.link.clone()));
}

/// Push a text-bearing item unless its text is empty.
fn push_text_item(sink: &mut ContentSink, text: String, make: impl FnOnce(String) -> ContentItem) {
    if text.is_empty() {
        log::trace!("dropping empty text item");
        return;
    }
    sink.push_item(make(text));
}

/// Walk the subtree rooted at `root` with `options`.
#[must_use]
pub fn walk(root: &NodeRef, options: &Options) -> Vec<ContentItem> {
    Walker::new(options).walk(root)
}
