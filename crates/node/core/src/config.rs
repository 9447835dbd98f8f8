//! Figment-based run configuration.
//!
//! Configuration priority (highest wins):
//! 1. CLI arguments (applied after Figment load)
//! 2. Environment variables (`PEERPROBE_` prefix, `__` between nested keys)
//! 3. Defaults

use std::path::PathBuf;
use std::time::Duration;

use eyre::{Result, WrapErr};
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use peerprobe_net_probe::{DEFAULT_CONCURRENCY, DEFAULT_PROBE_TIMEOUT, ProbeConfig};
use peerprobe_net_source::{DEFAULT_FETCH_TIMEOUT, PeerSource};
use serde::{Deserialize, Serialize};

use crate::args::{ProbeArgs, TargetArgs};

/// Default node configuration file.
pub const DEFAULT_NODE_CONFIG: &str = "node-config.yaml";

/// Default peer listing page.
pub const DEFAULT_SCRAPE_FROM: &str = "https://adapools.org/peers";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PEERPROBE_";

/// Everything a single run needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Node configuration file whose `p2p.trusted_peers` is rewritten.
    pub node_config: PathBuf,

    /// Peer listing source (URL or file path).
    pub scrape_from: String,

    /// Timeout for fetching the listing page, in seconds.
    pub fetch_timeout_secs: u64,

    /// Reachability probe settings.
    pub probe: ProbeSettings,
}

/// Serializable probe settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    pub timeout_ms: u64,
    pub concurrency: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            node_config: PathBuf::from(DEFAULT_NODE_CONFIG),
            scrape_from: DEFAULT_SCRAPE_FROM.to_owned(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
            probe: ProbeSettings::default(),
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_PROBE_TIMEOUT.as_millis() as u64,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl RunConfig {
    /// Load configuration from defaults and environment.
    /// CLI overrides should be applied separately after loading.
    pub fn load() -> Result<Self> {
        Self::figment()
            .extract()
            .wrap_err("Failed to load configuration")
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(RunConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Apply CLI arguments on top of the loaded configuration.
    pub fn apply_args(&mut self, target: &TargetArgs, probe: &ProbeArgs) {
        if let Some(config) = &target.config {
            self.node_config = config.clone();
        }
        if let Some(scrape_from) = &target.scrape_from {
            self.scrape_from = scrape_from.clone();
        }
        if let Some(timeout_ms) = probe.timeout_ms {
            self.probe.timeout_ms = timeout_ms;
        }
        if let Some(concurrency) = probe.concurrency {
            self.probe.concurrency = concurrency;
        }
    }

    pub fn peer_source(&self) -> PeerSource {
        PeerSource::parse(&self.scrape_from)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig::default()
            .with_timeout(Duration::from_millis(self.probe.timeout_ms))
            .with_concurrency(self.probe.concurrency)
    }
}
