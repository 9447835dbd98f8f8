//! Input and output locations.

use std::path::PathBuf;

use clap::Args;

/// Where to read peers from and which node configuration to rewrite.
#[derive(Debug, Args, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs {
    /// Node YAML configuration file to update [default: node-config.yaml].
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Peer listing source: a URL to scrape or a local YAML file
    /// [default: https://adapools.org/peers].
    #[arg(long = "scrape-from", visible_alias = "scrapeFrom", value_name = "URL|PATH")]
    pub scrape_from: Option<String>,
}
