//! Component ports
//!
//! Trait seams between the per-name registry core and concrete component
//! implementations. Each capability has one port; component types opt into
//! the construction-time hooks (`ConfigAwareInit`, `DependencyAware`)
//! through explicit marker accessors instead of runtime type inspection.

pub mod client;
pub mod component;
pub mod config;
pub mod lb_context;
pub mod load_balancer;

pub use client::Client;
pub use component::{ConfigAwareInit, DependencyAware, NamedComponent};
pub use config::ClientConfig;
pub use lb_context::LoadBalancerContext;
pub use load_balancer::LoadBalancer;
