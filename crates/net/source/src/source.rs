//! Listing source selection and retrieval.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::SourceError;
use crate::scrape::{decode_entities, extract_peer_block};

/// Default timeout for the whole listing page request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("peerprobe/", env!("CARGO_PKG_VERSION"));

/// Where the peer listing comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerSource {
    /// A web page embedding the listing in a `textarea.form-control`.
    Url(Url),
    /// A local file holding the listing itself.
    File(PathBuf),
}

impl PeerSource {
    /// Absolute `http`/`https` URLs are scraped; everything else is a file path.
    pub fn parse(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            _ => Self::File(PathBuf::from(source)),
        }
    }
}

impl fmt::Display for PeerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Retrieves listing text from a [`PeerSource`].
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: reqwest::Client,
}

impl SourceFetcher {
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Raw listing text with HTML entities decoded.
    ///
    /// Fails with [`SourceError::Empty`] when nothing but whitespace remains.
    pub async fn obtain_peer_text(&self, source: &PeerSource) -> Result<String, SourceError> {
        let raw = match source {
            PeerSource::Url(url) => self.scrape(url).await?,
            PeerSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Read {
                        path: path.clone(),
                        source,
                    })?
            }
        };

        let text = decode_entities(&raw);
        if text.trim().is_empty() {
            return Err(SourceError::Empty);
        }

        debug!(%source, bytes = text.len(), "obtained peer listing");
        Ok(text)
    }

    async fn scrape(&self, url: &Url) -> Result<String, SourceError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        Ok(extract_peer_block(&body))
    }
}
