//! Client configuration port

use crate::ports::component::NamedComponent;
use crate::value_objects::Server;
use std::time::Duration;

/// Well-known property keys understood by the typed accessors
pub mod keys {
    /// Connect timeout in milliseconds
    pub const CONNECT_TIMEOUT_MS: &str = "connect_timeout_ms";
    /// Read timeout in milliseconds
    pub const READ_TIMEOUT_MS: &str = "read_timeout_ms";
    /// Retries against the same server before giving up on it
    pub const MAX_RETRIES_SAME_SERVER: &str = "max_retries_same_server";
    /// Additional servers to try after the first one failed
    pub const MAX_RETRIES_NEXT_SERVER: &str = "max_retries_next_server";
    /// Comma-separated `host:port` seed list
    pub const SERVERS: &str = "servers";
}

/// Fallback connect timeout when the property is absent or malformed
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(2000);
/// Fallback read timeout when the property is absent or malformed
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(5000);
/// Fallback same-server retry budget
pub const DEFAULT_MAX_RETRIES_SAME_SERVER: u32 = 0;
/// Fallback next-server retry budget
pub const DEFAULT_MAX_RETRIES_NEXT_SERVER: u32 = 1;

/// Per-name settings consumed by the other components during construction
///
/// Implementations only have to provide raw property access; the typed
/// accessors parse on demand and fall back to the defaults above, so a
/// malformed property behaves like an absent one.
pub trait ClientConfig: NamedComponent {
    /// Name of the client these settings belong to
    fn client_name(&self) -> &str;

    /// Raw property lookup
    fn property(&self, key: &str) -> Option<&str>;

    /// Connect timeout
    fn connect_timeout(&self) -> Duration {
        self.millis_property(keys::CONNECT_TIMEOUT_MS)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT)
    }

    /// Read timeout
    fn read_timeout(&self) -> Duration {
        self.millis_property(keys::READ_TIMEOUT_MS)
            .unwrap_or(DEFAULT_READ_TIMEOUT)
    }

    /// Retries against the same server
    fn max_retries_same_server(&self) -> u32 {
        self.property(keys::MAX_RETRIES_SAME_SERVER)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES_SAME_SERVER)
    }

    /// Additional servers to try
    fn max_retries_next_server(&self) -> u32 {
        self.property(keys::MAX_RETRIES_NEXT_SERVER)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES_NEXT_SERVER)
    }

    /// Configured seed servers
    fn server_list(&self) -> Vec<Server> {
        self.property(keys::SERVERS)
            .map(Server::parse_list)
            .unwrap_or_default()
    }

    /// Parse a millisecond property into a duration
    fn millis_property(&self, key: &str) -> Option<Duration> {
        self.property(key)
            .and_then(|value| value.trim().parse().ok())
            .map(Duration::from_millis)
    }
}
