//! Properties loader
//!
//! Merges client properties from defaults, an optional TOML file and
//! environment variables. The TOML file is nested: each top-level table is a
//! client name, and a `[default]` table applies to every client.
//!
//! Sources are merged in this order (later sources override earlier):
//! 1. `ClientProperties::default()`
//! 2. The client's table in the TOML file (over its `[default]` table)
//! 3. Environment variables prefixed `NCR_<NAME>_` (e.g.
//!    `NCR_SERVICEA_CONNECT_TIMEOUT_MS`)

use crate::config::properties::ClientProperties;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use ncr_domain::{Error, Result};
use std::path::{Path, PathBuf};

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "NCR";

/// Loads [`ClientProperties`] per client name
#[derive(Debug, Clone)]
pub struct PropertiesLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl PropertiesLoader {
    /// Create a loader with no file source and the default env prefix
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Set the TOML file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load the merged properties for a client name
    pub fn load(&self, name: &str) -> Result<ClientProperties> {
        let mut figment = Figment::from(Serialized::defaults(ClientProperties::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path).nested());
            }
        }

        let env_prefix = format!(
            "{}_{}_",
            self.env_prefix,
            name.to_ascii_uppercase().replace('-', "_")
        );
        figment = figment.merge(Env::prefixed(&env_prefix).global());

        figment
            .select(name)
            .extract()
            .map_err(|error| Error::properties(name, error.to_string()))
    }
}

impl Default for PropertiesLoader {
    fn default() -> Self {
        Self::new()
    }
}
