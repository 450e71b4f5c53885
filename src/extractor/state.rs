//! Walk state: the output sequence and its paragraph cursor.
//!
//! A walk has exactly two paragraph states. `Open(i)` means the next text run
//! is appended to the paragraph at `items[i]`; `Closed` means the next run
//! starts a new paragraph. Pushing any other item closes the cursor; block
//! boundaries close it depending on `BlockBoundaries`.

use crate::content::{ContentItem, RichRun};
use crate::options::BlockBoundaries;

/// Paragraph state of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphCursor {
    Closed,
    Open(usize),
}

/// Ordered content items of one walk.
#[derive(Debug)]
pub struct ContentSink {
    items: Vec<ContentItem>,
    cursor: ParagraphCursor,
    boundaries: BlockBoundaries,
}

impl ContentSink {
    #[must_use]
    pub fn new(boundaries: BlockBoundaries) -> Self {
        Self {
            items: Vec::new(),
            cursor: ParagraphCursor::Closed,
            boundaries,
        }
    }

    /// Current paragraph state.
    #[must_use]
    pub fn cursor(&self) -> ParagraphCursor {
        self.cursor
    }

    /// Append a non-paragraph item and close any open paragraph.
    ///
    /// Break markers are boundaries, not items; they are routed to
    /// [`ContentSink::boundary`] and never stored.
    pub fn push_item(&mut self, item: ContentItem) {
        match item {
            ContentItem::Break => self.boundary(),
            ContentItem::Paragraph { runs } => {
                self.cursor = ParagraphCursor::Closed;
                for run in runs {
                    self.push_run(run);
                }
            }
            item => {
                self.items.push(item);
                self.cursor = ParagraphCursor::Closed;
            }
        }
    }

    /// Append a text run to the open paragraph, or open a new one.
    pub fn push_run(&mut self, run: RichRun) {
        if let ParagraphCursor::Open(index) = self.cursor {
            if let Some(ContentItem::Paragraph { runs }) = self.items.get_mut(index) {
                runs.push(run);
                return;
            }
        }

        self.items.push(ContentItem::Paragraph { runs: vec![run] });
        self.cursor = ParagraphCursor::Open(self.items.len() - 1);
    }

    /// A block-level element was entered or left.
    pub fn boundary(&mut self) {
        if self.boundaries == BlockBoundaries::CloseParagraph {
            self.cursor = ParagraphCursor::Closed;
        }
    }

    /// Number of items produced so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The finished sequence.
    #[must_use]
    pub fn finish(self) -> Vec<ContentItem> {
        self.items
    }
}
