//! Load balancer port
//!
//! Server-list discovery and health checking are external concerns; this
//! port only covers the surface the registry core and the execution context
//! need.

use crate::ports::component::NamedComponent;
use crate::value_objects::Server;

/// Server-choosing load balancer bound to one client name
pub trait LoadBalancer: NamedComponent {
    /// Add servers to the rotation
    fn add_servers(&self, servers: Vec<Server>);

    /// Choose the next server, `None` when the rotation is empty
    fn choose(&self) -> Option<Server>;

    /// Snapshot of the current rotation
    fn servers(&self) -> Vec<Server>;
}
