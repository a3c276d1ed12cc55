//! Component registration slice
//!
//! Auto-registration for built-in component implementations. Implementations
//! submit a [`ComponentRegistration`] via a `linkme` distributed slice and
//! are discovered at runtime by `(capability, name)`; wiring code turns the
//! selected registrations into a [`crate::ContextSpecification`].
//!
//! ## Registering a component
//!
//! ```ignore
//! use ncr_core::{ComponentRegistration, COMPONENT_REGISTRATIONS};
//!
//! #[linkme::distributed_slice(COMPONENT_REGISTRATIONS)]
//! static ROUND_ROBIN: ComponentRegistration = ComponentRegistration {
//!     capability: Capability::LoadBalancer,
//!     name: "round_robin",
//!     description: "Rotates through the configured server list",
//!     definition: ComponentDefinition { /* ... */ },
//! };
//! ```

use crate::definition::ComponentDefinition;
use ncr_domain::Capability;

/// Registry entry for a built-in component implementation
pub struct ComponentRegistration {
    /// Capability the implementation fulfils
    pub capability: Capability,
    /// Unique implementation name within the capability (e.g. `"round_robin"`)
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The definition wiring code copies into specifications
    pub definition: ComponentDefinition,
}

/// All registered component implementations
#[linkme::distributed_slice]
pub static COMPONENT_REGISTRATIONS: [ComponentRegistration] = [..];

/// Find a registration by capability and implementation name
pub fn find_registration(
    capability: Capability,
    name: &str,
) -> Option<&'static ComponentRegistration> {
    COMPONENT_REGISTRATIONS
        .iter()
        .find(|entry| entry.capability == capability && entry.name == name)
}

/// List registered implementations for a capability as (name, description)
///
/// Useful for CLI help and configuration validation.
pub fn list_registrations(capability: Capability) -> Vec<(&'static str, &'static str)> {
    COMPONENT_REGISTRATIONS
        .iter()
        .filter(|entry| entry.capability == capability)
        .map(|entry| (entry.name, entry.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_registration_is_absent() {
        // The slice is empty in unit tests since no provider crate is linked
        assert!(find_registration(Capability::Client, "no-such-impl").is_none());
    }

    #[test]
    fn listing_does_not_panic() {
        for capability in Capability::ALL {
            let _ = list_registrations(capability);
        }
    }
}
