//! Server identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single backend server a load balancer can hand out
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Server {
    /// Host name or address
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl Server {
    /// Create a new server identity
    pub fn new<H: Into<String>>(host: H, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Canonical `host:port` identifier
    pub fn id(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse a `host:port` string; the port defaults to 80 when absent
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match value.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() => {
                port.parse().ok().map(|port| Self::new(host, port))
            }
            Some(_) => None,
            None => Some(Self::new(value, 80)),
        }
    }

    /// Parse a comma-separated `host:port` list, skipping malformed entries
    pub fn parse_list(value: &str) -> Vec<Self> {
        value.split(',').filter_map(Self::parse).collect()
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
