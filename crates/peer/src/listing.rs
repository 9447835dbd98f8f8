//! Peer listing decoding.
//!
//! A listing is YAML of the form `peers: [{address, id}, ...]`. Scraped
//! listings usually arrive bare (just the sequence, sometimes indented), so
//! anything that is not already keyed under [`LISTING_KEY`] is wrapped under
//! it before decoding.

use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;

use crate::peer::Peer;

/// Key a listing's peers live under.
pub const LISTING_KEY: &str = "peers";

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("malformed peer listing: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Listing {
    #[serde(default)]
    peers: Option<Vec<Peer>>,
}

/// Decode a peer listing, preserving listing order.
pub fn parse_peers(text: &str) -> Result<Vec<Peer>, ListingError> {
    match serde_yaml::from_str::<Value>(text) {
        Ok(keyed @ Value::Mapping(_)) if keyed.get(LISTING_KEY).is_some() => {
            let listing: Listing = serde_yaml::from_value(keyed)?;
            Ok(listing.peers.unwrap_or_default())
        }
        Ok(seq @ Value::Sequence(_)) => Ok(serde_yaml::from_value(seq)?),
        _ => parse_wrapped(text),
    }
}

fn parse_wrapped(text: &str) -> Result<Vec<Peer>, ListingError> {
    let wrapped = format!("{LISTING_KEY}:\n{text}");
    let listing: Listing = serde_yaml::from_str(&wrapped)?;
    Ok(listing.peers.unwrap_or_default())
}
