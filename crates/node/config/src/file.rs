//! YAML node configuration with a replaceable trusted-peer list.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use peerprobe_peer::Peer;
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Section holding peer-to-peer settings.
pub const P2P_SECTION: &str = "p2p";

/// Key within [`P2P_SECTION`] listing the trusted peers.
pub const TRUSTED_PEERS_KEY: &str = "trusted_peers";

/// Name used in errors when the document root is not a mapping.
const ROOT_SECTION: &str = "(root)";

/// A loaded node configuration file.
#[derive(Debug, Clone)]
pub struct NodeConfigFile {
    path: PathBuf,
    document: Value,
}

impl NodeConfigFile {
    /// Read and parse the configuration at `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml(path, &text)
    }

    /// Parse configuration text that will be saved to `path`.
    pub fn from_yaml(path: impl Into<PathBuf>, text: &str) -> Result<Self, ConfigError> {
        let path = path.into();
        let document = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole configuration tree.
    pub fn document(&self) -> &Value {
        &self.document
    }

    fn p2p(&self) -> Result<&Mapping, ConfigError> {
        let root = self
            .document
            .as_mapping()
            .ok_or_else(|| self.invalid(ROOT_SECTION))?;

        match root.get(P2P_SECTION) {
            Some(Value::Mapping(p2p)) => Ok(p2p),
            Some(_) => Err(self.invalid(P2P_SECTION)),
            None => Err(self.missing(P2P_SECTION)),
        }
    }

    fn p2p_mut(&mut self) -> Result<&mut Mapping, ConfigError> {
        let path = &self.path;
        let root = self
            .document
            .as_mapping_mut()
            .ok_or_else(|| ConfigError::InvalidSection {
                path: path.clone(),
                section: ROOT_SECTION,
            })?;

        match root.get_mut(P2P_SECTION) {
            Some(Value::Mapping(p2p)) => Ok(p2p),
            Some(_) => Err(ConfigError::InvalidSection {
                path: path.clone(),
                section: P2P_SECTION,
            }),
            None => Err(ConfigError::MissingSection {
                path: path.clone(),
                section: P2P_SECTION,
            }),
        }
    }

    /// Current `p2p.trusted_peers`; empty when absent or null.
    pub fn trusted_peers(&self) -> Result<Vec<Peer>, ConfigError> {
        match self.p2p()?.get(TRUSTED_PEERS_KEY) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(peers) => {
                serde_yaml::from_value(peers.clone()).map_err(|source| ConfigError::Parse {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    /// Replace `p2p.trusted_peers` with `peers`, leaving every other key alone.
    pub fn set_trusted_peers(&mut self, peers: &[Peer]) -> Result<(), ConfigError> {
        let value = serde_yaml::to_value(peers).map_err(ConfigError::Serialize)?;
        self.p2p_mut()?
            .insert(Value::from(TRUSTED_PEERS_KEY), value);
        debug!(path = %self.path.display(), count = peers.len(), "replaced trusted peers");
        Ok(())
    }

    /// Serialize the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(&self.document).map_err(ConfigError::Serialize)
    }

    /// Write the configuration back to its path.
    ///
    /// The new contents go to a sibling `.tmp` file which is then renamed over
    /// the original, so readers never observe a half-written file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        let tmp_path = self.tmp_path();
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        fs::write(&tmp_path, yaml).map_err(write_err)?;

        // Keep the original file mode.
        if let Ok(metadata) = fs::metadata(&self.path)
            && let Err(e) = fs::set_permissions(&tmp_path, metadata.permissions())
        {
            warn!(path = %tmp_path.display(), error = %e, "failed to copy config file permissions");
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temporary config file");
            }
            return Err(write_err(e));
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn missing(&self, section: &'static str) -> ConfigError {
        ConfigError::MissingSection {
            path: self.path.clone(),
            section,
        }
    }

    fn invalid(&self, section: &'static str) -> ConfigError {
        ConfigError::InvalidSection {
            path: self.path.clone(),
            section,
        }
    }
}

/// Load `path`, replace its trusted peers and write it back.
pub fn update_trusted_peers(
    path: impl Into<PathBuf>,
    peers: &[Peer],
) -> Result<NodeConfigFile, ConfigError> {
    let mut config = NodeConfigFile::load(path)?;
    config.set_trusted_peers(peers)?;
    config.save()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const NODE_CONFIG: &str = r#"
storage: "/var/lib/node/storage"
log:
  - output: stderr
    format: plain
    level: info
p2p:
  public_address: /ip4/0.0.0.0/tcp/3000
  topics_of_interest:
    blocks: normal
    messages: low
  trusted_peers:
    - address: /ip4/52.9.132.248/tcp/3000
      id: 671a9e7a5c739532668511bea823f0f5c5557c99b813456c
  max_connections: 256
rest:
  listen: "127.0.0.1:3100"
"#;

    fn peers() -> Vec<Peer> {
        vec![
            Peer::new("/ip4/10.0.0.1/tcp/3000", "aa01"),
            Peer::new("/ip4/10.0.0.2/tcp/3000", "bb02"),
        ]
    }

    fn parse(text: &str) -> NodeConfigFile {
        NodeConfigFile::from_yaml("node-config.yaml", text).unwrap()
    }

    #[test]
    fn test_replace_trusted_peers() {
        let mut config = parse(NODE_CONFIG);
        assert_eq!(config.trusted_peers().unwrap().len(), 1);

        config.set_trusted_peers(&peers()).unwrap();
        assert_eq!(config.trusted_peers().unwrap(), peers());
    }

    #[test]
    fn test_unrelated_keys_preserved() {
        let before = parse(NODE_CONFIG);
        let mut config = before.clone();
        config.set_trusted_peers(&peers()).unwrap();

        let after = parse(&config.to_yaml().unwrap());
        let (old, new) = (before.document(), after.document());

        for key in ["storage", "log", "rest"] {
            assert_eq!(old.get(key), new.get(key), "{key}");
        }
        for key in ["public_address", "topics_of_interest", "max_connections"] {
            assert_eq!(old[P2P_SECTION].get(key), new[P2P_SECTION].get(key), "p2p.{key}");
        }
        assert_eq!(after.trusted_peers().unwrap(), peers());
    }

    #[test]
    fn test_key_order_kept() {
        let mut config = parse(NODE_CONFIG);
        config.set_trusted_peers(&peers()).unwrap();

        let keys: Vec<_> = config
            .document()
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, ["storage", "log", "p2p", "rest"]);
    }

    #[test]
    fn test_trusted_peers_added_when_absent() {
        let mut config = parse("p2p:\n  public_address: /ip4/0.0.0.0/tcp/3000\n");
        assert!(config.trusted_peers().unwrap().is_empty());

        config.set_trusted_peers(&peers()).unwrap();
        assert_eq!(config.trusted_peers().unwrap(), peers());
    }

    #[test]
    fn test_serialized_shape() {
        let mut config = parse("p2p:\n  trusted_peers: []\n");
        config.set_trusted_peers(&peers()[..1]).unwrap();
        assert_eq!(
            config.to_yaml().unwrap(),
            "p2p:\n  trusted_peers:\n  - address: /ip4/10.0.0.1/tcp/3000\n    id: aa01\n"
        );
    }

    #[test]
    fn test_missing_p2p() {
        let mut config = parse("storage: /tmp\n");
        assert_matches!(
            config.set_trusted_peers(&peers()),
            Err(ConfigError::MissingSection { section: P2P_SECTION, .. })
        );
    }

    #[test]
    fn test_p2p_wrong_shape() {
        let mut config = parse("p2p: enabled\n");
        assert_matches!(
            config.set_trusted_peers(&peers()),
            Err(ConfigError::InvalidSection { section: P2P_SECTION, .. })
        );

        let mut config = parse("- p2p\n");
        assert_matches!(
            config.set_trusted_peers(&peers()),
            Err(ConfigError::InvalidSection { section: ROOT_SECTION, .. })
        );
    }

    #[test]
    fn test_parse_error() {
        assert_matches!(
            NodeConfigFile::from_yaml("node-config.yaml", "p2p: [unterminated"),
            Err(ConfigError::Parse { .. })
        );
    }

    #[test]
    fn test_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            NodeConfigFile::load(dir.path().join("absent.yaml")),
            Err(ConfigError::Read { .. })
        );
    }

    #[test]
    fn test_update_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node-config.yaml");
        fs::write(&path, NODE_CONFIG).unwrap();

        update_trusted_peers(&path, &peers()).unwrap();

        let reloaded = NodeConfigFile::load(&path).unwrap();
        assert_eq!(reloaded.trusted_peers().unwrap(), peers());
        assert_eq!(reloaded.document()["rest"]["listen"], "127.0.0.1:3100");

        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1, "temporary file left behind");
    }

    #[test]
    fn test_failed_save_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be replaced by the renamed file.
        let path = dir.path().join("node-config.yaml");
        fs::create_dir(&path).unwrap();

        let config = NodeConfigFile::from_yaml(&path, NODE_CONFIG).unwrap();
        assert_matches!(config.save(), Err(ConfigError::Write { .. }));

        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1, "temporary file left behind");
    }
}
