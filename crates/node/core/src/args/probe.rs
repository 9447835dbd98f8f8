//! Reachability probe CLI arguments.

use clap::Args;

/// Probe tuning.
#[derive(Debug, Args, Clone, Default, PartialEq, Eq)]
#[command(next_help_heading = "Probing")]
pub struct ProbeArgs {
    /// Connect timeout per peer in milliseconds [default: 1000].
    #[arg(long = "probe.timeout", value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Maximum number of peers probed concurrently [default: 16].
    #[arg(long = "probe.concurrency", value_name = "N")]
    pub concurrency: Option<usize>,
}
