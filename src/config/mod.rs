//! Handler configuration.
//!
//! The host framework hands each handler a [`Configuration`]: a flat
//! key → string property source. [`HandlerConfig`] is the validated view the
//! EAI creation handler works from; [`PropertyMap`] is the in-memory source,
//! loadable from YAML files and environment variables.

mod handler;
mod properties;

pub use handler::HandlerConfig;
pub use properties::PropertyMap;

use std::collections::BTreeMap;

/// Property holding the remote DPS host.
pub const REMOTE_HOST_ATTR: &str = "remoteHost";
/// Property holding the remote DPS naming port.
pub const REMOTE_PORT_ATTR: &str = "remotePort";
/// Property holding the FDN of the managed object being added.
pub const PTR_FDN_ATTR: &str = "ptrFdn";
/// Property holding the network element type.
pub const NE_TYPE_ATTR: &str = "neType";
/// Property holding the platform type.
pub const PLATFORM_TYPE_ATTR: &str = "platformType";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "eai-handler.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "EAI_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "EAI";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "EAI_LOG";

/// Key-based string property source supplied by the host framework.
pub trait Configuration {
    /// Value of `key`, or `None` if the property is not set.
    fn get_string_property(&self, key: &str) -> Option<String>;

    /// Every property, for diagnostics.
    fn all_properties(&self) -> BTreeMap<String, String>;
}

/// Errors that can occur while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config attribute {0} is not set")]
    Missing(&'static str),

    #[error("This Config attribute was Null or Empty: {0}")]
    Empty(&'static str),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

impl ConfigError {
    /// The property that failed validation, if any.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            ConfigError::Missing(key) | ConfigError::Empty(key) => Some(key),
            ConfigError::Load(_) => None,
        }
    }
}
