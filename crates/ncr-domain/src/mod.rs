//! Domain layer for the Named Client Registry
//!
//! Defines the capability model, the component port traits, the shared
//! component handles and the error taxonomy. Everything here is transport
//! and storage agnostic: concrete component implementations live in
//! `ncr-providers`, the resolve-or-build protocol lives in `ncr-core`.

pub mod capability;
pub mod component;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use capability::Capability;
pub use component::{Component, ComponentCell};
pub use error::{Error, Result};
pub use ports::{
    Client, ClientConfig, ConfigAwareInit, DependencyAware, LoadBalancer, LoadBalancerContext,
    NamedComponent,
};
pub use value_objects::{ClientRequest, ClientResponse, Server};
