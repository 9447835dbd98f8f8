//! Listing extraction from HTML.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// Element holding the peer listing on the listing page.
pub const PEER_BLOCK_SELECTOR: &str = "textarea.form-control";

#[allow(clippy::expect_used)]
static PEER_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(PEER_BLOCK_SELECTOR).expect("static selector is valid"));

/// Serialized contents of the first [`PEER_BLOCK_SELECTOR`] element, or an
/// empty string.
///
/// The contents keep their entity escapes, so a single [`decode_entities`]
/// yields the listing text.
pub fn extract_peer_block(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .select(&PEER_BLOCK)
        .next()
        .map(|element| element.inner_html())
        .unwrap_or_default()
}

/// Decode HTML entity escapes (`&amp;`, `&#47;`, ...).
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
