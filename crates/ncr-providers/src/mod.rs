//! Built-in components and wiring for the Named Client Registry
//!
//! Concrete implementations for the four capabilities, property loading, and
//! the [`StandardDefinitionProvider`] that assembles per-name specifications
//! from the registration slice, loaded properties and caller-supplied
//! overrides.

pub mod client;
pub mod config;
pub mod lb_context;
pub mod load_balancer;
pub mod wiring;

pub use client::{DirectClient, NullClient};
pub use config::{ClientProperties, DefaultClientConfig, PropertiesLoader};
pub use lb_context::DefaultLoadBalancerContext;
pub use load_balancer::{NullLoadBalancer, RoundRobinLoadBalancer};
pub use wiring::{standard_client_factory, StandardDefinitionProvider};
