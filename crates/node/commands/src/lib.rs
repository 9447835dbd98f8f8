//! CLI commands for peerprobe.
//!
//! This crate provides the command-line interface:
//! - [`Cli`] - Top-level CLI parser
//! - [`run_update`] - scrape, probe and rewrite `p2p.trusted_peers`
//!
//! Configuration is loaded using Figment with the following priority
//! (highest wins):
//!
//! 1. CLI arguments
//! 2. Environment variables (`PEERPROBE_` prefix)
//! 3. Defaults

mod cli;
mod update;

pub use cli::Cli;
pub use update::{UpdateError, UpdateReport, run_update, run_update_with};

use clap::Parser;
use color_eyre::eyre;
use peerprobe_node_core::{RunConfig, logging};
use tracing::debug;

/// Run peerprobe with the process command line.
///
/// This is the main entry point that should be called from the binary.
pub async fn run() -> eyre::Result<()> {
    // Setup error handling
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()?;

    let cli = Cli::parse();

    logging::init_logging(&cli.logs)?;

    let mut config = RunConfig::load()?;
    config.apply_args(&cli.target, &cli.probe);
    debug!(?config, "resolved run configuration");

    run_update(&config).await?;

    Ok(())
}
