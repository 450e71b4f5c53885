//! Content extraction.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs (block, skipped, bold, heading levels)
//! - `state`: Output sequence with its paragraph cursor
//! - `image`: Image source resolution
//! - `table`: Table extraction
//! - `walker`: The document walker producing content items
//!
//! # Usage
//!
//! ```rust
//! use page_clipper::{dom, Options};
//! use page_clipper::extractor::walker;
//! use page_clipper::selector::locate_main_container;
//!
//! let doc = dom::parse("<article><h2>Intro</h2><p>Body text.</p></article>");
//! let options = Options::default();
//! let container = locate_main_container(&doc, options.min_container_text_len);
//! let items = walker::walk(&container.node, &options);
//! assert_eq!(items.len(), 2);
//! ```

pub mod image;
pub mod state;
pub mod table;
pub mod tags;
pub mod walker;

pub use image::resolve_image_url;
pub use state::{ContentSink, ParagraphCursor};
pub use table::extract_table;
pub use walker::{walk, Walker};
