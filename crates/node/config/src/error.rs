use std::path::PathBuf;

use thiserror::Error;

/// Errors loading, editing or saving a node configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read yaml {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unmarshal yaml {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{}: missing `{section}` section", .path.display())]
    MissingSection { path: PathBuf, section: &'static str },

    #[error("{}: `{section}` is not a mapping", .path.display())]
    InvalidSection { path: PathBuf, section: &'static str },

    #[error("marshal yaml: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("write yaml {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
