//! Round robin load balancer

use ncr_domain::{ClientConfig, ConfigAwareInit, LoadBalancer, NamedComponent, Result, Server};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// Rotates through its server list in order
///
/// Default-constructed empty, then seeded from the resolved config through
/// the config-aware initialization hook.
#[derive(Debug, Default)]
pub struct RoundRobinLoadBalancer {
    servers: RwLock<Vec<Server>>,
    cursor: AtomicUsize,
}

impl RoundRobinLoadBalancer {
    /// Create an empty rotation
    pub fn new() -> Self {
        Self::default()
    }
}

impl NamedComponent for RoundRobinLoadBalancer {
    fn component_name(&self) -> &'static str {
        "round_robin"
    }

    fn as_config_aware(&mut self) -> Option<&mut dyn ConfigAwareInit> {
        Some(self)
    }
}

impl ConfigAwareInit for RoundRobinLoadBalancer {
    fn init_with_config(&mut self, config: &dyn ClientConfig) -> Result<()> {
        self.add_servers(config.server_list());
        Ok(())
    }
}

impl LoadBalancer for RoundRobinLoadBalancer {
    fn add_servers(&self, mut servers: Vec<Server>) {
        self.servers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .append(&mut servers);
    }

    fn choose(&self) -> Option<Server> {
        let servers = self.servers.read().unwrap_or_else(PoisonError::into_inner);
        if servers.is_empty() {
            return None;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % servers.len();
        servers.get(index).cloned()
    }

    fn servers(&self) -> Vec<Server> {
        self.servers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
