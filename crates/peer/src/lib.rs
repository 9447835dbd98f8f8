//! Peer model for trusted-peer discovery.
//!
//! - [`Peer`] - a listed peer (`address` + opaque `id`)
//! - [`PeerAddress`] - the connect target derived from a peer address
//! - [`parse_peers`] - decodes a scraped peer listing

mod address;
mod listing;
mod peer;

pub use address::{AddressError, PeerAddress};
pub use listing::{LISTING_KEY, ListingError, parse_peers};
pub use peer::Peer;
