//! Shared component handles
//!
//! [`Component`] is the shared, capability-tagged handle cached per name and
//! returned to every caller; [`ComponentCell`] is the boxed pre-publication
//! form a builder mutates (init hook, dependency injection) before sealing
//! it into a [`Component`].

use crate::capability::Capability;
use crate::error::{Error, Result};
use crate::ports::{
    Client, ClientConfig, ConfigAwareInit, DependencyAware, LoadBalancer, LoadBalancerContext,
};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a built component instance
#[derive(Clone)]
pub enum Component {
    /// Per-name settings
    Config(Arc<dyn ClientConfig>),
    /// Request-executing client
    Client(Arc<dyn Client>),
    /// Server-choosing load balancer
    LoadBalancer(Arc<dyn LoadBalancer>),
    /// Load balancer execution context
    LoadBalancerContext(Arc<dyn LoadBalancerContext>),
}

impl Component {
    /// Capability this handle carries
    pub fn capability(&self) -> Capability {
        match self {
            Component::Config(_) => Capability::Config,
            Component::Client(_) => Capability::Client,
            Component::LoadBalancer(_) => Capability::LoadBalancer,
            Component::LoadBalancerContext(_) => Capability::LoadBalancerContext,
        }
    }

    /// Implementation name of the wrapped instance
    pub fn component_name(&self) -> &'static str {
        match self {
            Component::Config(inner) => inner.component_name(),
            Component::Client(inner) => inner.component_name(),
            Component::LoadBalancer(inner) => inner.component_name(),
            Component::LoadBalancerContext(inner) => inner.component_name(),
        }
    }

    /// Invoke the wrapped instance's dispose hook
    pub fn dispose(&self) {
        match self {
            Component::Config(inner) => inner.dispose(),
            Component::Client(inner) => inner.dispose(),
            Component::LoadBalancer(inner) => inner.dispose(),
            Component::LoadBalancerContext(inner) => inner.dispose(),
        }
    }

    /// Unwrap as a config handle
    pub fn expect_config(self) -> Result<Arc<dyn ClientConfig>> {
        match self {
            Component::Config(inner) => Ok(inner),
            other => Err(Error::capability_mismatch(
                Capability::Config,
                other.capability(),
            )),
        }
    }

    /// Unwrap as a client handle
    pub fn expect_client(self) -> Result<Arc<dyn Client>> {
        match self {
            Component::Client(inner) => Ok(inner),
            other => Err(Error::capability_mismatch(
                Capability::Client,
                other.capability(),
            )),
        }
    }

    /// Unwrap as a load balancer handle
    pub fn expect_load_balancer(self) -> Result<Arc<dyn LoadBalancer>> {
        match self {
            Component::LoadBalancer(inner) => Ok(inner),
            other => Err(Error::capability_mismatch(
                Capability::LoadBalancer,
                other.capability(),
            )),
        }
    }

    /// Unwrap as a load balancer context handle
    pub fn expect_load_balancer_context(self) -> Result<Arc<dyn LoadBalancerContext>> {
        match self {
            Component::LoadBalancerContext(inner) => Ok(inner),
            other => Err(Error::capability_mismatch(
                Capability::LoadBalancerContext,
                other.capability(),
            )),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("capability", &self.capability())
            .field("component", &self.component_name())
            .finish()
    }
}

/// Exclusive handle to a component under construction
///
/// Builders mutate the cell through the opt-in hook accessors, then seal it
/// with [`ComponentCell::into_shared`]. Once sealed, the instance is
/// immutable from the registry's point of view.
pub enum ComponentCell {
    /// Per-name settings
    Config(Box<dyn ClientConfig>),
    /// Request-executing client
    Client(Box<dyn Client>),
    /// Server-choosing load balancer
    LoadBalancer(Box<dyn LoadBalancer>),
    /// Load balancer execution context
    LoadBalancerContext(Box<dyn LoadBalancerContext>),
}

impl ComponentCell {
    /// Capability this cell carries
    pub fn capability(&self) -> Capability {
        match self {
            ComponentCell::Config(_) => Capability::Config,
            ComponentCell::Client(_) => Capability::Client,
            ComponentCell::LoadBalancer(_) => Capability::LoadBalancer,
            ComponentCell::LoadBalancerContext(_) => Capability::LoadBalancerContext,
        }
    }

    /// Implementation name of the instance under construction
    pub fn component_name(&self) -> &'static str {
        match self {
            ComponentCell::Config(inner) => inner.component_name(),
            ComponentCell::Client(inner) => inner.component_name(),
            ComponentCell::LoadBalancer(inner) => inner.component_name(),
            ComponentCell::LoadBalancerContext(inner) => inner.component_name(),
        }
    }

    /// Config-aware initialization hook, if the instance opts in
    pub fn as_config_aware(&mut self) -> Option<&mut dyn ConfigAwareInit> {
        match self {
            ComponentCell::Config(inner) => inner.as_config_aware(),
            ComponentCell::Client(inner) => inner.as_config_aware(),
            ComponentCell::LoadBalancer(inner) => inner.as_config_aware(),
            ComponentCell::LoadBalancerContext(inner) => inner.as_config_aware(),
        }
    }

    /// Dependency injection hook, if the instance opts in
    pub fn as_dependency_aware(&mut self) -> Option<&mut dyn DependencyAware> {
        match self {
            ComponentCell::Config(inner) => inner.as_dependency_aware(),
            ComponentCell::Client(inner) => inner.as_dependency_aware(),
            ComponentCell::LoadBalancer(inner) => inner.as_dependency_aware(),
            ComponentCell::LoadBalancerContext(inner) => inner.as_dependency_aware(),
        }
    }

    /// Seal the cell into a shared handle
    pub fn into_shared(self) -> Component {
        match self {
            ComponentCell::Config(inner) => Component::Config(Arc::from(inner)),
            ComponentCell::Client(inner) => Component::Client(Arc::from(inner)),
            ComponentCell::LoadBalancer(inner) => Component::LoadBalancer(Arc::from(inner)),
            ComponentCell::LoadBalancerContext(inner) => {
                Component::LoadBalancerContext(Arc::from(inner))
            }
        }
    }
}

impl fmt::Debug for ComponentCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentCell")
            .field("capability", &self.capability())
            .field("component", &self.component_name())
            .finish()
    }
}
