//! TCP reachability probing.
//!
//! A probe is a bare TCP connect: success means the peer is reachable, any
//! error or timeout means it is not. No bytes are exchanged.

mod config;
mod probe;

pub use config::{DEFAULT_CONCURRENCY, DEFAULT_PROBE_TIMEOUT, ProbeConfig};
pub use probe::{ProbeOutcome, TcpProbe};
