//! Load balancer implementations
//!
//! Only the simple built-ins live here; smarter balancing strategies plug in
//! through the same registration slice.

pub mod null;
pub mod round_robin;

pub use null::NullLoadBalancer;
pub use round_robin::RoundRobinLoadBalancer;
