//! Null load balancer for testing

use ncr_domain::{LoadBalancer, NamedComponent, Server};

/// Null load balancer with an always-empty rotation
#[derive(Debug, Clone, Default)]
pub struct NullLoadBalancer;

impl NullLoadBalancer {
    /// Create a new null load balancer
    pub fn new() -> Self {
        Self
    }
}

impl NamedComponent for NullLoadBalancer {
    fn component_name(&self) -> &'static str {
        "null"
    }
}

impl LoadBalancer for NullLoadBalancer {
    fn add_servers(&self, _servers: Vec<Server>) {
        // Accept and drop
    }

    fn choose(&self) -> Option<Server> {
        None
    }

    fn servers(&self) -> Vec<Server> {
        Vec::new()
    }
}
