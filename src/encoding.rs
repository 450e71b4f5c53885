//! Snapshot decoding.
//!
//! Snapshots handed over as bytes are decoded to UTF-8 before parsing. The
//! encoding comes from a byte-order mark if there is one, otherwise from a
//! charset declaration near the top of the document, otherwise UTF-8.
//! Decoding is lossy: invalid sequences become U+FFFD.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::META_CHARSET;

/// How far into the document a charset declaration is looked for.
const SNIFF_LIMIT: usize = 1024;

/// Encoding declared by a `<meta charset>` or `http-equiv` content-type tag.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    META_CHARSET
        .captures_iter(&head)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .find_map(|label| Encoding::for_label(label.as_str().trim().as_bytes()))
}

/// Decode an HTML snapshot to a UTF-8 string.
#[must_use]
pub fn decode_snapshot(html: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(html) {
        let (decoded, _) = encoding.decode_without_bom_handling(&html[bom_len..]);
        return decoded.into_owned();
    }

    // A declaration can't truthfully name UTF-16 on ASCII-compatible bytes;
    // those labels (and x-user-defined) map to their output encoding.
    let encoding = declared_encoding(html).map_or(UTF_8, Encoding::output_encoding);
    if encoding != UTF_8 {
        log::debug!("decoding snapshot as {}", encoding.name());
    }

    let (decoded, had_errors) = encoding.decode_without_bom_handling(html);
    if had_errors {
        log::debug!("snapshot contained invalid {} sequences", encoding.name());
    }
    decoded.into_owned()
}
