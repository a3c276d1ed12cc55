//! Component definitions and per-name specifications
//!
//! A [`ComponentDefinition`] is the factory-function entry backing one
//! capability: an optional config constructor (tier 1) and an optional
//! default constructor (tier 2). A [`ContextSpecification`] is the full
//! definition table plus property map a context is created from; the
//! [`DefinitionProvider`] collaborator assembles one per client name before
//! first use.

use ncr_domain::{Capability, ClientConfig, ComponentCell, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Tier-1 factory: build from the resolved config
///
/// Absence (`None` in the definition) means the type has no config
/// constructor; an `Err` from the call itself is absorbed by the builder and
/// falls through to tier 2.
pub type ConfigConstructor = fn(Arc<dyn ClientConfig>) -> Result<ComponentCell>;

/// Tier-2 factory: default construction from the build context
pub type DefaultConstructor = fn(&BuildContext<'_>) -> Result<ComponentCell>;

/// Everything a default constructor may draw on: the client name and the
/// context's property map
pub struct BuildContext<'a> {
    name: &'a str,
    properties: &'a HashMap<String, String>,
}

impl<'a> BuildContext<'a> {
    pub(crate) fn new(name: &'a str, properties: &'a HashMap<String, String>) -> Self {
        Self { name, properties }
    }

    /// Client name the component is being built for
    pub fn name(&self) -> &str {
        self.name
    }

    /// The context's property map
    pub fn properties(&self) -> &HashMap<String, String> {
        self.properties
    }

    /// Single property lookup
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Which concrete type backs a capability, and how to build it
#[derive(Clone, Copy)]
pub struct ComponentDefinition {
    /// Capability the definition fulfils
    pub capability: Capability,
    /// Concrete type name, for diagnostics and errors
    pub type_name: &'static str,
    /// Tier-1 constructor, `None` when the type has no config constructor
    pub config_constructor: Option<ConfigConstructor>,
    /// Tier-2 constructor, `None` when the type cannot be default-constructed
    pub default_constructor: Option<DefaultConstructor>,
}

impl fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("capability", &self.capability)
            .field("type_name", &self.type_name)
            .field("config_constructor", &self.config_constructor.is_some())
            .field("default_constructor", &self.default_constructor.is_some())
            .finish()
    }
}

/// Definition table plus property map for one client name
///
/// Assembled by the [`DefinitionProvider`] before a context's first use and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContextSpecification {
    definitions: HashMap<Capability, ComponentDefinition>,
    properties: HashMap<String, String>,
}

impl ContextSpecification {
    /// Create an empty specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style definition registration
    pub fn with_definition(mut self, definition: ComponentDefinition) -> Self {
        self.set_definition(definition);
        self
    }

    /// Builder-style property registration
    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set_property(key, value);
        self
    }

    /// Register a definition, replacing any previous one for the capability
    pub fn set_definition(&mut self, definition: ComponentDefinition) {
        self.definitions.insert(definition.capability, definition);
    }

    /// Register a property
    pub fn set_property<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.properties.insert(key.into(), value.into());
    }

    /// Definition lookup
    pub fn definition(&self, capability: Capability) -> Option<&ComponentDefinition> {
        self.definitions.get(&capability)
    }

    /// The property map
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Single property lookup
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Overlay another specification on top of this one
    ///
    /// The overlay's definitions and properties win on conflict.
    pub fn apply(&mut self, overlay: &ContextSpecification) {
        for definition in overlay.definitions.values() {
            self.set_definition(*definition);
        }
        for (key, value) in &overlay.properties {
            self.set_property(key.clone(), value.clone());
        }
    }
}

/// Supplies the specification for a client name
///
/// This is the narrow seam to the wiring collaborator: the registry consults
/// it exactly once per name and never inspects how the bindings were
/// produced.
pub trait DefinitionProvider: Send + Sync {
    /// Assemble the specification for `name`
    fn specification_for(&self, name: &str) -> Result<ContextSpecification>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncr_domain::Error;

    fn definition(capability: Capability, type_name: &'static str) -> ComponentDefinition {
        ComponentDefinition {
            capability,
            type_name,
            config_constructor: None,
            default_constructor: Some(|ctx| {
                Err(Error::component(format!("unused in this test: {}", ctx.name())))
            }),
        }
    }

    #[test]
    fn overlay_wins_on_conflict() {
        let mut base = ContextSpecification::new()
            .with_definition(definition(Capability::Client, "BaseClient"))
            .with_property("servers", "a:1");
        let overlay = ContextSpecification::new()
            .with_definition(definition(Capability::Client, "OverlayClient"))
            .with_property("servers", "b:2")
            .with_property("read_timeout_ms", "100");

        base.apply(&overlay);

        assert_eq!(
            base.definition(Capability::Client).map(|d| d.type_name),
            Some("OverlayClient")
        );
        assert_eq!(base.property("servers"), Some("b:2"));
        assert_eq!(base.property("read_timeout_ms"), Some("100"));
    }

    #[test]
    fn build_context_reads_the_property_map() {
        let spec = ContextSpecification::new().with_property("servers", "a:1,b:2");
        let ctx = BuildContext::new("serviceA", spec.properties());
        assert_eq!(ctx.name(), "serviceA");
        assert_eq!(ctx.property("servers"), Some("a:1,b:2"));
        assert_eq!(ctx.property("missing"), None);
    }
}
