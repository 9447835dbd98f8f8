use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors obtaining peer listing text.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The listing page answered with a non-success status.
    #[error("web page status: {status} ({url})")]
    Status { url: String, status: StatusCode },

    /// Transport failure talking to the listing host.
    #[error("fetching peer listing: {0}")]
    Http(#[from] reqwest::Error),

    /// The local listing file could not be read.
    #[error("reading peer listing {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing left after extraction and decoding.
    #[error("scraped peer list is empty")]
    Empty,
}
