//! Service discovery for remote mediation collaborators.
//!
//! Resolves the remote Data Persistence Service through the naming
//! directory. Handles are never cached: every call performs a fresh lookup,
//! narrow and create.

pub mod remote_dps;

pub use remote_dps::RemoteDpsLocator;

use crate::dps::DpsError;
use crate::naming::NamingError;

/// Error types for service discovery.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Naming lookup of {lookup} failed: {source}")]
    Naming {
        lookup: String,
        #[source]
        source: NamingError,
    },

    #[error("Object bound at {lookup} is not a persistence service home: {source}")]
    Narrow {
        lookup: String,
        #[source]
        source: NamingError,
    },

    #[error("Failed to create persistence service from home at {lookup}: {source}")]
    Create {
        lookup: String,
        #[source]
        source: DpsError,
    },
}

impl DiscoveryError {
    /// The lookup string that was being resolved.
    pub fn lookup(&self) -> &str {
        match self {
            DiscoveryError::Naming { lookup, .. }
            | DiscoveryError::Narrow { lookup, .. }
            | DiscoveryError::Create { lookup, .. } => lookup,
        }
    }
}
