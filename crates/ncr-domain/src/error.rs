//! Error handling types

use crate::capability::Capability;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Named Client Registry
///
/// Every propagated variant carries the requesting client name and, where a
/// component was involved, the requested capability or concrete type name.
#[derive(Error, Debug)]
pub enum Error {
    /// Registry failed to materialize a context for a client name
    #[error("failed to create context for client `{name}`: {message}")]
    ContextCreation {
        /// Client name the context was requested for
        name: String,
        /// Description of the failure
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<Error>>,
    },

    /// Recursive resolution of the client config failed
    #[error("failed to resolve config for client `{name}`")]
    ConfigResolution {
        /// Client name the config was requested for
        name: String,
        /// The underlying resolution error
        #[source]
        source: Box<Error>,
    },

    /// No component definition or usable constructor for the capability
    #[error("no way to instantiate `{capability}` for client `{name}`")]
    Instantiation {
        /// Client name the component was requested for
        name: String,
        /// Requested capability
        capability: Capability,
    },

    /// Default construction, the init hook or dependency injection failed
    #[error("failed to construct `{type_name}` for client `{name}`: {message}")]
    Construction {
        /// Client name the component was requested for
        name: String,
        /// Concrete type that failed to construct
        type_name: String,
        /// Description of the failure
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<Error>>,
    },

    /// A component handle was requested as the wrong capability
    #[error("expected a `{expected}` component, got `{actual}`")]
    CapabilityMismatch {
        /// Capability the caller asked for
        expected: Capability,
        /// Capability the handle actually carries
        actual: Capability,
    },

    /// Property loading or parsing failed
    #[error("failed to load properties for client `{name}`: {message}")]
    Properties {
        /// Client name the properties were loaded for
        name: String,
        /// Description of the failure
        message: String,
    },

    /// The load balancer has no server to offer
    #[error("load balancer for client `{name}` has no available server")]
    NoAvailableServers {
        /// Client name whose balancer is empty
        name: String,
    },

    /// Generic component-internal failure
    #[error("{message}")]
    Component {
        /// Description of the failure
        message: String,
    },
}

impl Error {
    /// Create a context creation error
    pub fn context_creation<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self::ContextCreation {
            name: name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a context creation error wrapping an underlying error
    pub fn context_creation_with_source<N: Into<String>>(name: N, source: Error) -> Self {
        Self::ContextCreation {
            name: name.into(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a config resolution error wrapping the point of failure
    pub fn config_resolution<N: Into<String>>(name: N, source: Error) -> Self {
        Self::ConfigResolution {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Create an instantiation error for a capability with no construction path
    pub fn instantiation<N: Into<String>>(name: N, capability: Capability) -> Self {
        Self::Instantiation {
            name: name.into(),
            capability,
        }
    }

    /// Create a construction error
    pub fn construction<N: Into<String>, T: Into<String>, M: Into<String>>(
        name: N,
        type_name: T,
        message: M,
    ) -> Self {
        Self::Construction {
            name: name.into(),
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction error wrapping an underlying error
    pub fn construction_with_source<N: Into<String>, T: Into<String>>(
        name: N,
        type_name: T,
        source: Error,
    ) -> Self {
        Self::Construction {
            name: name.into(),
            type_name: type_name.into(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a capability mismatch error
    pub fn capability_mismatch(expected: Capability, actual: Capability) -> Self {
        Self::CapabilityMismatch { expected, actual }
    }

    /// Create a property loading error
    pub fn properties<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self::Properties {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a no-available-servers error
    pub fn no_available_servers<N: Into<String>>(name: N) -> Self {
        Self::NoAvailableServers { name: name.into() }
    }

    /// Create a generic component error
    pub fn component<M: Into<String>>(message: M) -> Self {
        Self::Component {
            message: message.into(),
        }
    }
}
