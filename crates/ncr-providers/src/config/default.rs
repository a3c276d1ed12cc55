//! Default client configuration component

use ncr_core::BuildContext;
use ncr_domain::{ClientConfig, NamedComponent};
use std::collections::HashMap;

/// Property-backed client configuration
///
/// Holds the context's property map verbatim; the typed accessors of the
/// [`ClientConfig`] port parse on demand.
#[derive(Debug, Clone)]
pub struct DefaultClientConfig {
    name: String,
    properties: HashMap<String, String>,
}

impl DefaultClientConfig {
    /// Create a config from an explicit property map
    pub fn new<N: Into<String>>(name: N, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Create a config from the build context of the name being constructed
    pub fn from_build_context(context: &BuildContext<'_>) -> Self {
        Self::new(context.name(), context.properties().clone())
    }
}

impl NamedComponent for DefaultClientConfig {
    fn component_name(&self) -> &'static str {
        "default"
    }
}

impl ClientConfig for DefaultClientConfig {
    fn client_name(&self) -> &str {
        &self.name
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncr_domain::ports::config::keys;
    use ncr_domain::Server;
    use std::time::Duration;

    fn config_with(entries: &[(&str, &str)]) -> DefaultClientConfig {
        let properties = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DefaultClientConfig::new("serviceA", properties)
    }

    #[test]
    fn typed_accessors_parse_properties() {
        let config = config_with(&[
            (keys::CONNECT_TIMEOUT_MS, "250"),
            (keys::MAX_RETRIES_NEXT_SERVER, "3"),
            (keys::SERVERS, "a:1,b:2"),
        ]);
        assert_eq!(config.connect_timeout(), Duration::from_millis(250));
        assert_eq!(config.max_retries_next_server(), 3);
        assert_eq!(
            config.server_list(),
            vec![Server::new("a", 1), Server::new("b", 2)]
        );
    }

    #[test]
    fn malformed_properties_fall_back_to_defaults() {
        let config = config_with(&[(keys::CONNECT_TIMEOUT_MS, "soon")]);
        assert_eq!(
            config.connect_timeout(),
            ncr_domain::ports::config::DEFAULT_CONNECT_TIMEOUT
        );
        assert_eq!(config.server_list(), Vec::<Server>::new());
    }
}
