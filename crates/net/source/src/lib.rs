//! Peer listing sources.
//!
//! A listing is either scraped from a web page (the text of its first
//! `textarea.form-control`) or read from a local file. Either way HTML
//! entities are decoded before the text is handed to the listing parser.

mod error;
mod scrape;
mod source;

pub use error::SourceError;
pub use scrape::{PEER_BLOCK_SELECTOR, decode_entities, extract_peer_block};
pub use source::{DEFAULT_FETCH_TIMEOUT, PeerSource, SourceFetcher};
