//! Shared infrastructure for the peerprobe binary.
//!
//! - [`args`] - CLI argument structs
//! - [`config`] - layered run configuration (defaults, environment, CLI)
//! - [`logging`] - logging initialization

pub mod args;
pub mod config;
pub mod logging;

pub use config::{ProbeSettings, RunConfig};
