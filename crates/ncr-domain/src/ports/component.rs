//! Base component trait and opt-in construction hooks

use crate::capability::Capability;
use crate::component::Component;
use crate::error::Result;
use crate::ports::config::ClientConfig;

/// Base trait every component type implements
///
/// The two `as_*` accessors are the explicit replacement for runtime
/// capability probing: a type that wants the corresponding hook overrides
/// the accessor to return `Some(self)`, everything else inherits `None`.
pub trait NamedComponent: Send + Sync {
    /// Short implementation name for diagnostics (e.g. `"round_robin"`)
    fn component_name(&self) -> &'static str;

    /// Opt-in access to the config-aware initialization hook
    fn as_config_aware(&mut self) -> Option<&mut dyn ConfigAwareInit> {
        None
    }

    /// Opt-in access to declared-dependency injection
    fn as_dependency_aware(&mut self) -> Option<&mut dyn DependencyAware> {
        None
    }

    /// Release held resources; invoked once when the owning context is disposed
    fn dispose(&self) {}
}

/// Config-aware initialization, invoked after default construction
///
/// The hook receives the config resolved for the same client name the
/// component is being built for.
pub trait ConfigAwareInit {
    /// Initialize the freshly constructed component from the resolved config
    fn init_with_config(&mut self, config: &dyn ClientConfig) -> Result<()>;
}

/// Declared-dependency injection, invoked after config-aware initialization
///
/// The declared capability list must be acyclic across the component set of
/// a context; a component must never declare its own capability.
pub trait DependencyAware {
    /// Capabilities to resolve from the same context and inject
    fn declared_dependencies(&self) -> &'static [Capability];

    /// Accept one resolved dependency
    fn inject_dependency(&mut self, dependency: Component) -> Result<()>;
}
