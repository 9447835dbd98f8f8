//! Top-level CLI parser.

use clap::Parser;

use peerprobe_node_core::args::{LogArgs, ProbeArgs, TargetArgs};

/// Keep a node's trusted peers limited to peers that accept TCP connections.
///
/// Scrapes a peer listing, probes every listed peer and rewrites
/// `p2p.trusted_peers` in the node configuration with the reachable ones.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input and output locations.
    #[command(flatten)]
    pub target: TargetArgs,

    /// Probe configuration.
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Logging configuration.
    #[command(flatten)]
    pub logs: LogArgs,
}
