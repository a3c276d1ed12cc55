//! Load balancer execution context port

use crate::error::Result;
use crate::ports::component::NamedComponent;
use crate::ports::config::ClientConfig;
use crate::ports::load_balancer::LoadBalancer;
use crate::value_objects::Server;
use std::sync::Arc;

/// Execution context pairing a load balancer with its client config
///
/// The accessors return `None` until the corresponding dependency has been
/// injected during construction.
pub trait LoadBalancerContext: NamedComponent {
    /// The load balancer serving this client name
    fn load_balancer(&self) -> Option<Arc<dyn LoadBalancer>>;

    /// The config resolved for this client name
    fn client_config(&self) -> Option<Arc<dyn ClientConfig>>;

    /// Retry budget against the same server
    fn max_retries_same_server(&self) -> u32;

    /// Retry budget across servers
    fn max_retries_next_server(&self) -> u32;

    /// Ask the load balancer for a server
    fn choose_server(&self) -> Result<Server>;
}
