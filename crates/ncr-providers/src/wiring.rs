//! Component registrations and the standard definition provider
//!
//! Submits every built-in implementation to the core's registration slice
//! and assembles per-name context specifications from three layers:
//!
//! 1. Implementation selection from loaded properties (e.g.
//!    `client = "null"`), looked up in the registration slice
//! 2. The loaded properties themselves, flattened into the context's
//!    property map
//! 3. Caller-supplied per-name specification overrides, registered before
//!    first use

use crate::client::{DirectClient, NullClient};
use crate::config::{DefaultClientConfig, PropertiesLoader};
use crate::lb_context::DefaultLoadBalancerContext;
use crate::load_balancer::{NullLoadBalancer, RoundRobinLoadBalancer};
use linkme::distributed_slice;
use ncr_core::{
    find_registration, ClientFactory, ComponentDefinition, ComponentRegistration,
    ContextSpecification, DefinitionProvider, COMPONENT_REGISTRATIONS,
};
use ncr_domain::{Capability, ComponentCell, Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[distributed_slice(COMPONENT_REGISTRATIONS)]
static DEFAULT_CONFIG: ComponentRegistration = ComponentRegistration {
    capability: Capability::Config,
    name: "default",
    description: "Property-backed client configuration",
    definition: ComponentDefinition {
        capability: Capability::Config,
        type_name: "DefaultClientConfig",
        config_constructor: None,
        default_constructor: Some(|ctx| {
            Ok(ComponentCell::Config(Box::new(
                DefaultClientConfig::from_build_context(ctx),
            )))
        }),
    },
};

#[distributed_slice(COMPONENT_REGISTRATIONS)]
static NULL_CLIENT: ComponentRegistration = ComponentRegistration {
    capability: Capability::Client,
    name: "null",
    description: "Accepts every request and does nothing",
    definition: ComponentDefinition {
        capability: Capability::Client,
        type_name: "NullClient",
        config_constructor: None,
        default_constructor: Some(|_ctx| Ok(ComponentCell::Client(Box::new(NullClient::new())))),
    },
};

#[distributed_slice(COMPONENT_REGISTRATIONS)]
static DIRECT_CLIENT: ComponentRegistration = ComponentRegistration {
    capability: Capability::Client,
    name: "direct",
    description: "Routes requests to the configured servers without a transport",
    definition: ComponentDefinition {
        capability: Capability::Client,
        type_name: "DirectClient",
        config_constructor: Some(|config| {
            Ok(ComponentCell::Client(Box::new(DirectClient::from_config(
                config,
            )?)))
        }),
        default_constructor: None,
    },
};

#[distributed_slice(COMPONENT_REGISTRATIONS)]
static NULL_LOAD_BALANCER: ComponentRegistration = ComponentRegistration {
    capability: Capability::LoadBalancer,
    name: "null",
    description: "Always-empty rotation",
    definition: ComponentDefinition {
        capability: Capability::LoadBalancer,
        type_name: "NullLoadBalancer",
        config_constructor: None,
        default_constructor: Some(|_ctx| {
            Ok(ComponentCell::LoadBalancer(Box::new(
                NullLoadBalancer::new(),
            )))
        }),
    },
};

#[distributed_slice(COMPONENT_REGISTRATIONS)]
static ROUND_ROBIN_LOAD_BALANCER: ComponentRegistration = ComponentRegistration {
    capability: Capability::LoadBalancer,
    name: "round_robin",
    description: "Rotates through the configured server list",
    definition: ComponentDefinition {
        capability: Capability::LoadBalancer,
        type_name: "RoundRobinLoadBalancer",
        config_constructor: None,
        default_constructor: Some(|_ctx| {
            Ok(ComponentCell::LoadBalancer(Box::new(
                RoundRobinLoadBalancer::new(),
            )))
        }),
    },
};

#[distributed_slice(COMPONENT_REGISTRATIONS)]
static DEFAULT_LB_CONTEXT: ComponentRegistration = ComponentRegistration {
    capability: Capability::LoadBalancerContext,
    name: "default",
    description: "Pairs the name's load balancer with its config",
    definition: ComponentDefinition {
        capability: Capability::LoadBalancerContext,
        type_name: "DefaultLoadBalancerContext",
        config_constructor: None,
        default_constructor: Some(|ctx| {
            Ok(ComponentCell::LoadBalancerContext(Box::new(
                DefaultLoadBalancerContext::new(ctx.name()),
            )))
        }),
    },
};

/// Assembles per-name specifications from registrations, properties and
/// overrides
pub struct StandardDefinitionProvider {
    loader: PropertiesLoader,
    overrides: HashMap<String, ContextSpecification>,
}

impl StandardDefinitionProvider {
    /// Create a provider with default property loading and no overrides
    pub fn new() -> Self {
        Self {
            loader: PropertiesLoader::new(),
            overrides: HashMap::new(),
        }
    }

    /// Load properties from the given TOML file
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.loader = self.loader.with_config_path(path);
        self
    }

    /// Change the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.loader = self.loader.with_env_prefix(prefix);
        self
    }

    /// Register a per-name specification override
    ///
    /// Overrides are applied on top of the assembled specification, so they
    /// can replace definitions and properties alike. Registration happens at
    /// setup time, before the name's first resolution.
    pub fn with_specification<N: Into<String>>(
        mut self,
        name: N,
        specification: ContextSpecification,
    ) -> Self {
        self.overrides.insert(name.into(), specification);
        self
    }
}

impl Default for StandardDefinitionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionProvider for StandardDefinitionProvider {
    fn specification_for(&self, name: &str) -> Result<ContextSpecification> {
        let properties = self.loader.load(name)?;

        let mut specification = ContextSpecification::new();
        let selections = [
            (Capability::Config, properties.config.as_str()),
            (Capability::Client, properties.client.as_str()),
            (Capability::LoadBalancer, properties.load_balancer.as_str()),
            (
                Capability::LoadBalancerContext,
                properties.load_balancer_context.as_str(),
            ),
        ];
        for (capability, selection) in selections {
            let registration = find_registration(capability, selection).ok_or_else(|| {
                Error::properties(
                    name,
                    format!(
                        "unknown `{}` implementation `{selection}`",
                        capability.key()
                    ),
                )
            })?;
            specification.set_definition(registration.definition);
        }

        for (key, value) in properties.to_map() {
            specification.set_property(key, value);
        }

        if let Some(overlay) = self.overrides.get(name) {
            specification.apply(overlay);
        }

        debug!(client = name, "assembled context specification");
        Ok(specification)
    }
}

/// Create a [`ClientFactory`] wired with the standard provider set
pub fn standard_client_factory() -> ClientFactory {
    ClientFactory::new(Arc::new(StandardDefinitionProvider::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncr_core::list_registrations;

    #[test]
    fn builtins_are_registered() {
        assert!(find_registration(Capability::Client, "direct").is_some());
        assert!(find_registration(Capability::Client, "null").is_some());
        assert!(find_registration(Capability::LoadBalancer, "round_robin").is_some());
        assert!(find_registration(Capability::LoadBalancer, "null").is_some());
        assert!(find_registration(Capability::Config, "default").is_some());
        assert!(find_registration(Capability::LoadBalancerContext, "default").is_some());
    }

    #[test]
    fn listing_names_the_builtins() {
        let clients = list_registrations(Capability::Client);
        let names: Vec<&str> = clients.iter().map(|(name, _)| *name).collect();
        assert!(names.contains(&"direct"));
        assert!(names.contains(&"null"));
    }

    #[test]
    fn default_specification_covers_every_capability() {
        let provider = StandardDefinitionProvider::new();
        let specification = provider.specification_for("serviceA").unwrap();
        for capability in Capability::ALL {
            assert!(
                specification.definition(capability).is_some(),
                "missing definition for {capability}"
            );
        }
        assert_eq!(specification.property("client"), Some("direct"));
    }

    #[test]
    fn overrides_replace_assembled_parts() {
        let null_client = find_registration(Capability::Client, "null").unwrap();
        let provider = StandardDefinitionProvider::new().with_specification(
            "serviceA",
            ContextSpecification::new()
                .with_definition(null_client.definition)
                .with_property("servers", "a:1"),
        );

        let specification = provider.specification_for("serviceA").unwrap();
        assert_eq!(
            specification.definition(Capability::Client).map(|d| d.type_name),
            Some("NullClient")
        );
        assert_eq!(specification.property("servers"), Some("a:1"));

        // Other names are untouched
        let other = provider.specification_for("serviceB").unwrap();
        assert_eq!(
            other.definition(Capability::Client).map(|d| d.type_name),
            Some("DirectClient")
        );
    }
}
