//! Typed client properties

use ncr_domain::ports::config::keys;
use ncr_domain::Capability;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings for one client name
///
/// The implementation-selection fields name entries in the component
/// registration slice; the remaining fields are the settings the built-in
/// components consume. Unknown keys are kept in `extra` and passed through
/// to the context's property map untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientProperties {
    /// Config implementation to use
    pub config: String,
    /// Client implementation to use
    pub client: String,
    /// Load balancer implementation to use
    pub load_balancer: String,
    /// Load balancer context implementation to use
    pub load_balancer_context: String,
    /// Connect timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
    /// Retries against the same server
    pub max_retries_same_server: u32,
    /// Additional servers to try
    pub max_retries_next_server: u32,
    /// Seed servers as `host:port` entries
    pub servers: Vec<String>,
    /// Additional string properties, passed through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

impl Default for ClientProperties {
    fn default() -> Self {
        Self {
            config: "default".to_string(),
            client: "direct".to_string(),
            load_balancer: "round_robin".to_string(),
            load_balancer_context: "default".to_string(),
            connect_timeout_ms: 2000,
            read_timeout_ms: 5000,
            max_retries_same_server: 0,
            max_retries_next_server: 1,
            servers: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl ClientProperties {
    /// Flatten into the opaque string property map the core carries
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert(Capability::Config.key().to_string(), self.config.clone());
        map.insert(Capability::Client.key().to_string(), self.client.clone());
        map.insert(
            Capability::LoadBalancer.key().to_string(),
            self.load_balancer.clone(),
        );
        map.insert(
            Capability::LoadBalancerContext.key().to_string(),
            self.load_balancer_context.clone(),
        );
        map.insert(
            keys::CONNECT_TIMEOUT_MS.to_string(),
            self.connect_timeout_ms.to_string(),
        );
        map.insert(
            keys::READ_TIMEOUT_MS.to_string(),
            self.read_timeout_ms.to_string(),
        );
        map.insert(
            keys::MAX_RETRIES_SAME_SERVER.to_string(),
            self.max_retries_same_server.to_string(),
        );
        map.insert(
            keys::MAX_RETRIES_NEXT_SERVER.to_string(),
            self.max_retries_next_server.to_string(),
        );
        map.insert(keys::SERVERS.to_string(), self.servers.join(","));
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}
