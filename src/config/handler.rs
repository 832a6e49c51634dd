//! Validated EAI creation handler settings.

use tracing::debug;

use super::{
    ConfigError, Configuration, NE_TYPE_ATTR, PLATFORM_TYPE_ATTR, PTR_FDN_ATTR, REMOTE_HOST_ATTR,
    REMOTE_PORT_ATTR,
};

/// Settings read once at initialization and immutable afterwards.
///
/// Every field is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Host of the remote DPS naming service.
    pub remote_host: String,
    /// Port of the remote DPS naming service.
    pub remote_port: String,
    /// FDN of the managed object the EAI is attached to.
    pub target_fdn: String,
    pub ne_type: String,
    pub platform_type: String,
}

impl HandlerConfig {
    /// Read and validate all required properties.
    ///
    /// Properties are checked in declaration order; the first missing or
    /// empty one is reported.
    pub fn extract(config: &dyn Configuration) -> Result<Self, ConfigError> {
        debug!(properties = ?config.all_properties(), "The config attributes are");

        Ok(Self {
            remote_host: required(config, REMOTE_HOST_ATTR)?,
            remote_port: required(config, REMOTE_PORT_ATTR)?,
            target_fdn: required(config, PTR_FDN_ATTR)?,
            ne_type: required(config, NE_TYPE_ATTR)?,
            platform_type: required(config, PLATFORM_TYPE_ATTR)?,
        })
    }
}

fn required(config: &dyn Configuration, key: &'static str) -> Result<String, ConfigError> {
    match config.get_string_property(key) {
        None => Err(ConfigError::Missing(key)),
        Some(value) if value.is_empty() => Err(ConfigError::Empty(key)),
        Some(value) => Ok(value),
    }
}
