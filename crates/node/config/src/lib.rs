//! Node configuration file handling.
//!
//! The node configuration is kept as an untyped YAML tree so that everything
//! except `p2p.trusted_peers` survives a rewrite unchanged.

mod error;
mod file;

pub use error::ConfigError;
pub use file::{NodeConfigFile, P2P_SECTION, TRUSTED_PEERS_KEY, update_trusted_peers};
