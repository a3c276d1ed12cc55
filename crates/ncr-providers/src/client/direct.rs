//! Direct client
//!
//! Resolves the target server and echoes the routed request back. Stands in
//! for a transport-backed client: request execution against a real wire
//! protocol is outside this crate.

use ncr_domain::{
    Client, ClientConfig, ClientRequest, ClientResponse, Error, NamedComponent, Result, Server,
};
use std::sync::Arc;
use std::time::Duration;

/// Client built from the resolved config, routing to the configured servers
#[derive(Debug, Clone)]
pub struct DirectClient {
    client_name: String,
    servers: Vec<Server>,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl DirectClient {
    /// Build a client from the config resolved for its name
    pub fn from_config(config: Arc<dyn ClientConfig>) -> Result<Self> {
        Ok(Self {
            client_name: config.client_name().to_string(),
            servers: config.server_list(),
            connect_timeout: config.connect_timeout(),
            read_timeout: config.read_timeout(),
        })
    }

    /// Configured connect timeout
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Configured read timeout
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }
}

impl NamedComponent for DirectClient {
    fn component_name(&self) -> &'static str {
        "direct"
    }
}

impl Client for DirectClient {
    fn execute(&self, request: &ClientRequest) -> Result<ClientResponse> {
        let server = request
            .server
            .clone()
            .or_else(|| self.servers.first().cloned())
            .ok_or_else(|| Error::no_available_servers(&self.client_name))?;
        Ok(ClientResponse::new(
            200,
            format!("{} -> {}", request.uri, server),
        ))
    }
}
