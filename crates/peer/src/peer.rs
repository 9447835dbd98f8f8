//! Listed peer record.

use serde::{Deserialize, Serialize};

use crate::address::{AddressError, PeerAddress};

/// A peer as it appears in a peer listing and in `p2p.trusted_peers`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Peer {
    /// Multiaddress-like location, e.g. `/ip4/203.0.113.5/tcp/3000`.
    #[serde(alias = "Address")]
    pub address: String,

    /// Opaque peer identifier. Carried through untouched.
    #[serde(alias = "Id")]
    pub id: String,
}

impl Peer {
    pub fn new(address: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            id: id.into(),
        }
    }

    /// Connect target for this peer.
    pub fn endpoint(&self) -> Result<PeerAddress, AddressError> {
        self.address.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_capitalised_keys() {
        let peer: Peer =
            serde_yaml::from_str("Address: /ip4/10.0.0.1/tcp/3000\nId: abc123\n").unwrap();
        assert_eq!(peer, Peer::new("/ip4/10.0.0.1/tcp/3000", "abc123"));
    }

    #[test]
    fn test_serialize_lowercase_keys() {
        let yaml = serde_yaml::to_string(&Peer::new("/ip4/10.0.0.1/tcp/3000", "abc123")).unwrap();
        assert_eq!(yaml, "address: /ip4/10.0.0.1/tcp/3000\nid: abc123\n");
    }

    #[test]
    fn test_endpoint() {
        let peer = Peer::new("/ip4/203.0.113.5/tcp/3000", "ff");
        let endpoint = peer.endpoint().unwrap();
        assert_eq!(endpoint.host(), "203.0.113.5");
        assert_eq!(endpoint.port(), 3000);
    }
}
