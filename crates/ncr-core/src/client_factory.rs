//! Typed client factory facade
//!
//! Convenience wrappers over `resolve(name, capability)` for the four
//! well-known capabilities, plus context lifecycle management.

use crate::definition::DefinitionProvider;
use crate::registry::ContextRegistry;
use crate::resolver::InstanceResolver;
use ncr_domain::{
    Capability, Client, ClientConfig, Component, LoadBalancer, LoadBalancerContext, Result,
};
use std::fmt;
use std::sync::Arc;

/// Factory for per-name client, load balancer, config and execution context
/// instances
///
/// One independent instance set is kept per client name; instances are built
/// lazily on first request and shared by every caller asking for the same
/// (name, capability) pair.
pub struct ClientFactory {
    registry: Arc<ContextRegistry>,
    resolver: InstanceResolver,
}

impl ClientFactory {
    /// Create a factory backed by the given definition provider
    pub fn new(provider: Arc<dyn DefinitionProvider>) -> Self {
        let registry = Arc::new(ContextRegistry::new(provider));
        let resolver = InstanceResolver::new(Arc::clone(&registry));
        Self { registry, resolver }
    }

    /// Resolve the instance fulfilling `capability` for `name`
    pub fn resolve(&self, name: &str, capability: Capability) -> Result<Component> {
        self.resolver.resolve(name, capability)
    }

    /// Get the client associated with the name
    pub fn get_client(&self, name: &str) -> Result<Arc<dyn Client>> {
        self.resolve(name, Capability::Client)?.expect_client()
    }

    /// Get the load balancer associated with the name
    pub fn get_load_balancer(&self, name: &str) -> Result<Arc<dyn LoadBalancer>> {
        self.resolve(name, Capability::LoadBalancer)?
            .expect_load_balancer()
    }

    /// Get the client config associated with the name
    pub fn get_client_config(&self, name: &str) -> Result<Arc<dyn ClientConfig>> {
        self.resolve(name, Capability::Config)?.expect_config()
    }

    /// Get the load balancer context associated with the name
    pub fn get_load_balancer_context(&self, name: &str) -> Result<Arc<dyn LoadBalancerContext>> {
        self.resolve(name, Capability::LoadBalancerContext)?
            .expect_load_balancer_context()
    }

    /// Names with a live context
    pub fn context_names(&self) -> Vec<String> {
        self.registry.context_names()
    }

    /// Dispose the context for a name, releasing its cached instances
    pub fn dispose(&self, name: &str) -> bool {
        self.registry.dispose(name)
    }

    /// Dispose every context
    pub fn dispose_all(&self) {
        self.registry.dispose_all();
    }
}

impl fmt::Debug for ClientFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientFactory")
            .field("contexts", &self.context_names())
            .finish()
    }
}
