//! Uniform handler error.
//!
//! Every failure surfaced to the engine is a [`HandlerError`]. The variant
//! tells which step failed; the underlying cause stays reachable through
//! `std::error::Error::source`.

use crate::config::ConfigError;
use crate::discovery::DiscoveryError;
use crate::dps::DpsError;

/// Result type for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;

/// Failure class of a [`HandlerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerErrorKind {
    Configuration,
    Lookup,
    Creation,
    NotFound,
    Association,
}

/// Errors returned to the mediation engine.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// A required configuration value is missing or empty, or the handler
    /// was used before a successful `init`.
    #[error("{message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<ConfigError>,
    },

    /// The remote DPS could not be resolved.
    #[error("{message}")]
    Lookup {
        message: String,
        #[source]
        source: DiscoveryError,
    },

    /// The EntityAddressInfo object could not be created.
    #[error("{message}")]
    Creation {
        message: String,
        #[source]
        source: DpsError,
    },

    /// No managed object exists at the configured FDN.
    #[error("{message}")]
    NotFound { fdn: String, message: String },

    /// Reading the managed object or setting the association failed.
    #[error("{message}")]
    Association {
        fdn: String,
        message: String,
        #[source]
        source: DpsError,
    },
}

impl HandlerError {
    pub fn kind(&self) -> HandlerErrorKind {
        match self {
            HandlerError::Configuration { .. } => HandlerErrorKind::Configuration,
            HandlerError::Lookup { .. } => HandlerErrorKind::Lookup,
            HandlerError::Creation { .. } => HandlerErrorKind::Creation,
            HandlerError::NotFound { .. } => HandlerErrorKind::NotFound,
            HandlerError::Association { .. } => HandlerErrorKind::Association,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HandlerError::Configuration { message, .. }
            | HandlerError::Lookup { message, .. }
            | HandlerError::Creation { message, .. }
            | HandlerError::NotFound { message, .. }
            | HandlerError::Association { message, .. } => message,
        }
    }

    /// FDN of the target managed object, for FDN-scoped failures.
    pub fn fdn(&self) -> Option<&str> {
        match self {
            HandlerError::NotFound { fdn, .. } | HandlerError::Association { fdn, .. } => Some(fdn),
            _ => None,
        }
    }

    /// Returns true if the target managed object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HandlerError::NotFound { .. })
    }
}
