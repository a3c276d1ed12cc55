//! # Named Client Registry
//!
//! Per-name isolated sets of interacting components: for each logical
//! backend, the registry lazily builds and caches a client, a load balancer,
//! a configuration object and a load balancer execution context. Each name
//! gets one independent instance set, so configuration and state for
//! different backends never leak into each other.
//!
//! ## Example
//!
//! ```ignore
//! use ncr::standard_client_factory;
//! use ncr::domain::ClientRequest;
//!
//! let factory = standard_client_factory();
//!
//! // Built lazily on first request, then shared by every caller
//! let balancer = factory.get_load_balancer("serviceA")?;
//! let client = factory.get_client("serviceA")?;
//!
//! let response = client.execute(&ClientRequest::new("/ping"))?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capability model, component ports, value objects and errors
//! - `registry` - per-name context registry, two-tier instance builder and
//!   the typed `ClientFactory` facade
//! - `providers` - built-in component implementations, property loading and
//!   the standard wiring

/// Domain layer - capability model, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ncr_domain::*;
}

/// Registry layer - per-name contexts, resolver and client factory
///
/// Re-exports from the core crate for convenience
pub mod registry {
    pub use ncr_core::*;
}

/// Provider layer - built-in components and wiring
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use ncr_providers::*;
}

pub use ncr_core::ClientFactory;
pub use ncr_domain::{Capability, Component, Error, Result};
pub use ncr_providers::{standard_client_factory, StandardDefinitionProvider};
