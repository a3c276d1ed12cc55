//! Instance resolver
//!
//! Orchestrates `resolve(name, capability)`: cache hit returns the shared
//! instance; a miss takes the capability's build lock, re-checks, resolves
//! the config for the name, delegates to the two-tier builder and publishes
//! the result. Nothing is cached on failure, so callers may retry.

use crate::builder;
use crate::context::ClientContext;
use crate::registry::ContextRegistry;
use ncr_domain::{Capability, Component, Error, Result};
use std::sync::{Arc, PoisonError};
use tracing::{debug, info};

/// Resolves component instances through the per-name registry
pub struct InstanceResolver {
    registry: Arc<ContextRegistry>,
}

impl InstanceResolver {
    /// Create a resolver over the given registry
    pub fn new(registry: Arc<ContextRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this resolver operates on
    pub fn registry(&self) -> &Arc<ContextRegistry> {
        &self.registry
    }

    /// Resolve the instance fulfilling `capability` for `name`
    pub fn resolve(&self, name: &str, capability: Capability) -> Result<Component> {
        let context = self.registry.get_or_create(name)?;
        self.resolve_in(&context, capability)
    }

    pub(crate) fn resolve_in(
        &self,
        context: &ClientContext,
        capability: Capability,
    ) -> Result<Component> {
        if let Some(component) = context.try_get(capability) {
            return Ok(component);
        }

        // A poisoned build lock means an earlier builder panicked before
        // publishing; the slot is still empty and safe to fill.
        let _guard = context
            .build_lock(capability)
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(component) = context.try_get(capability) {
            debug!(
                client = context.name(),
                capability = %capability,
                "lost the build race, using the winner's instance"
            );
            return Ok(component);
        }

        // Most components need the name's config to construct; the config
        // itself is built straight from the definition table.
        let config = if capability == Capability::Config {
            None
        } else {
            let resolved = self
                .resolve_in(context, Capability::Config)
                .map_err(|source| Error::config_resolution(context.name(), source))?;
            Some(resolved.expect_config()?)
        };

        let cell = builder::instantiate(self, context, capability, config.as_ref())?;
        let component = cell.into_shared();
        info!(
            client = context.name(),
            capability = %capability,
            component = component.component_name(),
            "instantiated component"
        );
        Ok(context.put(capability, component))
    }
}
