//! Trusted-peer update pipeline.
//!
//! Scrape the listing, parse it, probe every candidate and write the
//! reachable peers to `p2p.trusted_peers`. Any failure other than an
//! individual probe aborts the run before the node configuration is touched.

use peerprobe_net_probe::TcpProbe;
use peerprobe_net_source::{SourceError, SourceFetcher};
use peerprobe_node_config::{ConfigError, update_trusted_peers};
use peerprobe_node_core::RunConfig;
use peerprobe_peer::{ListingError, Peer, parse_peers};
use thiserror::Error;
use tokio::task::{JoinError, spawn_blocking};
use tracing::info;

/// Fatal errors of an update run.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("empty peers: none of {candidates} listed peers accepted a connection")]
    NoReachablePeers { candidates: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("node config update task failed: {0}")]
    Task(#[from] JoinError),
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Number of peers in the listing.
    pub candidates: usize,
    /// Peers written to `p2p.trusted_peers`, in listing order.
    pub trusted: Vec<Peer>,
}

/// Run the update with a fetcher built from `config`.
pub async fn run_update(config: &RunConfig) -> Result<UpdateReport, UpdateError> {
    let fetcher = SourceFetcher::new(config.fetch_timeout())?;
    run_update_with(config, &fetcher).await
}

/// Run the update using `fetcher` to obtain the listing.
pub async fn run_update_with(
    config: &RunConfig,
    fetcher: &SourceFetcher,
) -> Result<UpdateReport, UpdateError> {
    let source = config.peer_source();
    info!("Scraping peers from {source}");

    let text = fetcher.obtain_peer_text(&source).await?;
    let listed = parse_peers(&text)?;
    let candidates = listed.len();

    info!(candidates, "Connecting to peers");
    let trusted = TcpProbe::new(config.probe_config())
        .reachable(listed)
        .await;

    if trusted.is_empty() {
        return Err(UpdateError::NoReachablePeers { candidates });
    }

    let path = config.node_config.clone();
    let peers = trusted.clone();
    let updated = spawn_blocking(move || update_trusted_peers(path, &peers)).await??;
    info!(
        trusted = trusted.len(),
        "Working peers list has been updated in {}",
        updated.path().display()
    );

    Ok(UpdateReport {
        candidates,
        trusted,
    })
}
