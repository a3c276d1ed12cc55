//! Null client for testing
//!
//! A client implementation that doesn't talk to anything. Useful for testing
//! and for names whose traffic should be dropped.

use ncr_domain::{Client, ClientRequest, ClientResponse, NamedComponent, Result};

/// Null client that accepts every request and does nothing
#[derive(Debug, Clone, Default)]
pub struct NullClient;

impl NullClient {
    /// Create a new null client
    pub fn new() -> Self {
        Self
    }
}

impl NamedComponent for NullClient {
    fn component_name(&self) -> &'static str {
        "null"
    }
}

impl Client for NullClient {
    fn execute(&self, _request: &ClientRequest) -> Result<ClientResponse> {
        // Accept the request but produce nothing
        Ok(ClientResponse::new(204, ""))
    }
}
