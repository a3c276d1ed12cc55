//! Default load balancer execution context

use ncr_domain::{
    Capability, ClientConfig, Component, ConfigAwareInit, DependencyAware, Error, LoadBalancer,
    LoadBalancerContext, NamedComponent, Result, Server,
};
use ncr_domain::ports::config::{
    DEFAULT_MAX_RETRIES_NEXT_SERVER, DEFAULT_MAX_RETRIES_SAME_SERVER,
};
use std::sync::Arc;

/// Execution context pairing the name's load balancer with its config
///
/// Default-constructed empty; the retry budget comes from the config-aware
/// initialization hook and the component handles from declared-dependency
/// injection, both during construction.
pub struct DefaultLoadBalancerContext {
    client_name: String,
    load_balancer: Option<Arc<dyn LoadBalancer>>,
    client_config: Option<Arc<dyn ClientConfig>>,
    max_retries_same_server: u32,
    max_retries_next_server: u32,
}

impl DefaultLoadBalancerContext {
    /// Create an unwired context for a client name
    pub fn new<N: Into<String>>(client_name: N) -> Self {
        Self {
            client_name: client_name.into(),
            load_balancer: None,
            client_config: None,
            max_retries_same_server: DEFAULT_MAX_RETRIES_SAME_SERVER,
            max_retries_next_server: DEFAULT_MAX_RETRIES_NEXT_SERVER,
        }
    }

    /// Client name this context belongs to
    pub fn client_name(&self) -> &str {
        &self.client_name
    }
}

impl NamedComponent for DefaultLoadBalancerContext {
    fn component_name(&self) -> &'static str {
        "default"
    }

    fn as_config_aware(&mut self) -> Option<&mut dyn ConfigAwareInit> {
        Some(self)
    }

    fn as_dependency_aware(&mut self) -> Option<&mut dyn DependencyAware> {
        Some(self)
    }
}

impl ConfigAwareInit for DefaultLoadBalancerContext {
    fn init_with_config(&mut self, config: &dyn ClientConfig) -> Result<()> {
        self.max_retries_same_server = config.max_retries_same_server();
        self.max_retries_next_server = config.max_retries_next_server();
        Ok(())
    }
}

impl DependencyAware for DefaultLoadBalancerContext {
    fn declared_dependencies(&self) -> &'static [Capability] {
        &[Capability::Config, Capability::LoadBalancer]
    }

    fn inject_dependency(&mut self, dependency: Component) -> Result<()> {
        match dependency {
            Component::Config(config) => self.client_config = Some(config),
            Component::LoadBalancer(balancer) => self.load_balancer = Some(balancer),
            other => {
                return Err(Error::component(format!(
                    "unexpected dependency `{}` injected into load balancer context",
                    other.capability()
                )))
            }
        }
        Ok(())
    }
}

impl LoadBalancerContext for DefaultLoadBalancerContext {
    fn load_balancer(&self) -> Option<Arc<dyn LoadBalancer>> {
        self.load_balancer.clone()
    }

    fn client_config(&self) -> Option<Arc<dyn ClientConfig>> {
        self.client_config.clone()
    }

    fn max_retries_same_server(&self) -> u32 {
        self.max_retries_same_server
    }

    fn max_retries_next_server(&self) -> u32 {
        self.max_retries_next_server
    }

    fn choose_server(&self) -> Result<Server> {
        self.load_balancer
            .as_ref()
            .and_then(|balancer| balancer.choose())
            .ok_or_else(|| Error::no_available_servers(&self.client_name))
    }
}
