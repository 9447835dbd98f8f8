//! Slash-delimited peer addresses.
//!
//! Addresses look like `/ip4/203.0.113.5/tcp/3000`: an empty leading segment,
//! the address family, the host, then protocol/port pairs. Only the host
//! (segment 2) and the final segment (the port) are used.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Minimum number of `/`-separated segments needed to locate a port.
const MIN_SEGMENTS: usize = 4;

/// Index of the host segment.
const HOST_SEGMENT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address {address:?} has {segments} segments, need at least {min}", min = MIN_SEGMENTS)]
    TooFewSegments { address: String, segments: usize },
    #[error("address {address:?} has invalid port {port:?}")]
    InvalidPort { address: String, port: String },
}

/// Host and port extracted from a peer address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeerAddress {
    family: String,
    host: String,
    port: u16,
}

impl PeerAddress {
    /// Address family segment, e.g. `ip4`.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl FromStr for PeerAddress {
    type Err = AddressError;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = address.split('/').collect();
        let too_few = || AddressError::TooFewSegments {
            address: address.to_owned(),
            segments: segments.len(),
        };

        if segments.len() < MIN_SEGMENTS {
            return Err(too_few());
        }

        let family = segments.get(1).ok_or_else(too_few)?;
        let host = segments.get(HOST_SEGMENT).ok_or_else(too_few)?;
        let port = segments.last().ok_or_else(too_few)?;

        let port = port.parse::<u16>().map_err(|_| AddressError::InvalidPort {
            address: address.to_owned(),
            port: (*port).to_owned(),
        })?;

        Ok(Self {
            family: (*family).to_owned(),
            host: (*host).to_owned(),
            port,
        })
    }
}

/// Renders as a `host:port` connect target, bracketing IPv6 hosts.
impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_host_and_port() {
        let addr: PeerAddress = "/ip4/203.0.113.5/tcp/3000".parse().unwrap();
        assert_eq!(addr.family(), "ip4");
        assert_eq!(addr.host(), "203.0.113.5");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_port_is_last_segment() {
        let addr: PeerAddress = "/dns4/relay.example.org/udp/9/tcp/3100".parse().unwrap();
        assert_eq!(addr.host(), "relay.example.org");
        assert_eq!(addr.port(), 3100);

        let addr: PeerAddress = "/ip4/10.1.1.1/3000".parse().unwrap();
        assert_eq!(addr.host(), "10.1.1.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_too_few_segments() {
        assert_matches!(
            "/ip4".parse::<PeerAddress>(),
            Err(AddressError::TooFewSegments { segments: 2, .. })
        );
        assert_matches!(
            "/ip4/10.0.0.1".parse::<PeerAddress>(),
            Err(AddressError::TooFewSegments { segments: 3, .. })
        );
        assert_matches!(
            "".parse::<PeerAddress>(),
            Err(AddressError::TooFewSegments { segments: 1, .. })
        );
    }

    #[test]
    fn test_invalid_port() {
        assert_matches!(
            "/ip4/10.0.0.1/tcp/http".parse::<PeerAddress>(),
            Err(AddressError::InvalidPort { port, .. }) if port == "http"
        );
        assert_matches!(
            "/ip4/10.0.0.1/tcp/70000".parse::<PeerAddress>(),
            Err(AddressError::InvalidPort { .. })
        );
    }

    #[test]
    fn test_display() {
        let v4: PeerAddress = "/ip4/127.0.0.1/tcp/3000".parse().unwrap();
        assert_eq!(v4.to_string(), "127.0.0.1:3000");

        let v6: PeerAddress = "/ip6/::1/tcp/3000".parse().unwrap();
        assert_eq!(v6.host(), "::1");
        assert_eq!(v6.to_string(), "[::1]:3000");
    }
}
