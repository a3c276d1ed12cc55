//! Two-tier instance builder
//!
//! Tier 1 invokes the definition's config constructor with the config
//! resolved for the name. Tier 2 default-constructs from the build context,
//! then runs the config-aware init hook and declared-dependency injection
//! for components that opt in.
//!
//! Compatibility note: a tier-1 constructor that fails is absorbed and
//! execution falls through to tier 2, exactly like a constructor that does
//! not exist. This masks genuine construction-time failures in tier 1; the
//! absorbed error is logged at `warn!` so it is at least visible.

use crate::context::ClientContext;
use crate::resolver::InstanceResolver;
use ncr_domain::{Capability, ClientConfig, ComponentCell, Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Build an instance of `capability` for the context, using the two-tier
/// strategy driven by the resolved config
///
/// `config` is `None` only when the config capability itself is being built;
/// in that case tier 1, the init hook and injection are all skipped and the
/// definition's default path is used directly.
pub(crate) fn instantiate(
    resolver: &InstanceResolver,
    context: &ClientContext,
    capability: Capability,
    config: Option<&Arc<dyn ClientConfig>>,
) -> Result<ComponentCell> {
    let definition = context
        .specification()
        .definition(capability)
        .ok_or_else(|| Error::instantiation(context.name(), capability))?;

    // Tier 1: config constructor
    if let Some(config) = config {
        if let Some(constructor) = definition.config_constructor {
            match constructor(Arc::clone(config)) {
                Ok(cell) => {
                    debug!(
                        client = context.name(),
                        type_name = definition.type_name,
                        "built via config constructor"
                    );
                    return Ok(cell);
                }
                Err(error) => {
                    warn!(
                        client = context.name(),
                        type_name = definition.type_name,
                        %error,
                        "config constructor failed, falling back to default construction"
                    );
                }
            }
        }
    }

    // Tier 2: default construction
    let constructor = definition
        .default_constructor
        .ok_or_else(|| Error::instantiation(context.name(), capability))?;
    let mut cell = constructor(&context.build_context()).map_err(|source| {
        Error::construction_with_source(context.name(), definition.type_name, source)
    })?;

    if let Some(config) = config {
        if let Some(aware) = cell.as_config_aware() {
            aware.init_with_config(config.as_ref()).map_err(|source| {
                Error::construction_with_source(context.name(), definition.type_name, source)
            })?;
        }

        let dependencies: Vec<Capability> = cell
            .as_dependency_aware()
            .map(|aware| aware.declared_dependencies().to_vec())
            .unwrap_or_default();
        for dependency in dependencies {
            if dependency == capability {
                return Err(Error::construction(
                    context.name(),
                    definition.type_name,
                    format!("component declares a dependency on its own capability `{dependency}`"),
                ));
            }
            let resolved = resolver.resolve_in(context, dependency)?;
            if let Some(aware) = cell.as_dependency_aware() {
                aware.inject_dependency(resolved).map_err(|source| {
                    Error::construction_with_source(context.name(), definition.type_name, source)
                })?;
            }
        }
    }

    Ok(cell)
}
