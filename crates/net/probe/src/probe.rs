//! Connect-and-drop probe.

use std::io;

use futures::{StreamExt, future, stream};
use peerprobe_peer::{AddressError, Peer};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::ProbeConfig;

/// Result of probing one peer.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// TCP connect succeeded.
    Reachable,
    /// The peer address has no usable host/port.
    Malformed(AddressError),
    /// Connect failed.
    Failed(io::Error),
    /// Connect did not complete within the timeout.
    TimedOut,
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable)
    }
}

/// TCP reachability prober.
#[derive(Debug, Clone, Default)]
pub struct TcpProbe {
    config: ProbeConfig,
}

impl TcpProbe {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe a single peer. Never fails; problems are reported in the outcome.
    pub async fn probe(&self, peer: &Peer) -> ProbeOutcome {
        let endpoint = match peer.endpoint() {
            Ok(endpoint) => endpoint,
            Err(e) => {
                info!(address = %peer.address, error = %e, "[ERR] malformed peer address");
                return ProbeOutcome::Malformed(e);
            }
        };

        let connect = TcpStream::connect((endpoint.host(), endpoint.port()));
        match timeout(self.config.timeout, connect).await {
            Ok(Ok(stream)) => {
                drop(stream);
                info!(family = endpoint.family(), host = endpoint.host(), "[OK] peer reachable");
                ProbeOutcome::Reachable
            }
            Ok(Err(e)) => {
                info!(%endpoint, error = %e, "[ERR] peer unreachable");
                ProbeOutcome::Failed(e)
            }
            Err(_) => {
                info!(%endpoint, timeout = ?self.config.timeout, "[ERR] peer connect timed out");
                ProbeOutcome::TimedOut
            }
        }
    }

    pub async fn is_reachable(&self, peer: &Peer) -> bool {
        self.probe(peer).await.is_reachable()
    }

    /// Reachable subset of `peers`, in input order.
    ///
    /// Up to `concurrency` probes run at once; `buffered` yields results in
    /// submission order regardless of which connect finishes first.
    pub async fn reachable(&self, peers: Vec<Peer>) -> Vec<Peer> {
        let candidates = peers.len();
        debug!(candidates, concurrency = self.config.effective_concurrency(), "probing peers");

        let reachable: Vec<Peer> = stream::iter(peers)
            .map(|peer| async move { self.is_reachable(&peer).await.then_some(peer) })
            .buffered(self.config.effective_concurrency())
            .filter_map(future::ready)
            .collect()
            .await;

        info!(
            candidates,
            reachable = reachable.len(),
            unreachable = candidates - reachable.len(),
            "probing finished"
        );
        reachable
    }
}
