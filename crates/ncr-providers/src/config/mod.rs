//! Per-name client configuration
//!
//! [`ClientProperties`] is the typed settings struct, [`PropertiesLoader`]
//! merges it from defaults, a TOML file and environment variables, and
//! [`DefaultClientConfig`] is the component the registry caches per name.

pub mod default;
pub mod loader;
pub mod properties;

pub use default::DefaultClientConfig;
pub use loader::PropertiesLoader;
pub use properties::ClientProperties;
