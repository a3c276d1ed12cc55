//! Client port

use crate::error::Result;
use crate::ports::component::NamedComponent;
use crate::value_objects::{ClientRequest, ClientResponse};

/// Request-executing client bound to one client name
pub trait Client: NamedComponent {
    /// Execute a request against the backend this client is configured for
    fn execute(&self, request: &ClientRequest) -> Result<ClientResponse>;
}
