//! Request and response carried through the client port

use crate::value_objects::Server;

/// A request handed to a [`crate::ports::Client`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRequest {
    /// Request target, relative to the chosen server
    pub uri: String,
    /// Explicit server override; when absent the client picks one
    pub server: Option<Server>,
}

impl ClientRequest {
    /// Create a request for the given URI with no server override
    pub fn new<U: Into<String>>(uri: U) -> Self {
        Self {
            uri: uri.into(),
            server: None,
        }
    }

    /// Pin the request to a specific server
    pub fn with_server(mut self, server: Server) -> Self {
        self.server = Some(server);
        self
    }
}

/// The outcome of executing a [`ClientRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientResponse {
    /// Status code, HTTP-flavored
    pub status: u16,
    /// Response payload
    pub body: String,
}

impl ClientResponse {
    /// Create a response
    pub fn new<B: Into<String>>(status: u16, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
