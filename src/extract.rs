//! The extraction pipeline: parse, locate the main container, walk it.

use crate::content::ContentItem;
use crate::dom::{self, Document};
use crate::extractor::Walker;
use crate::options::Options;
use crate::selector::locate_main_container;

pub(crate) fn extract_content(html: &str, options: &Options) -> Vec<ContentItem> {
    log::debug!("starting extraction ({} bytes of html)", html.len());

    let document = dom::parse(html);
    extract_from_document(&document, options)
}

pub(crate) fn extract_from_document(document: &Document, options: &Options) -> Vec<ContentItem> {
    let container = locate_main_container(document, options.min_container_text_len);

    let items = Walker::new(options).walk(&container.node);
    log::debug!("extracted {} content items ({:?})", items.len(), container.strategy);
    items
}
