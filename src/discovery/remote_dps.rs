//! Remote DPS locator.
//!
//! Builds `corbaname:iiop:<host>:<port>#<service>`, resolves it, narrows the
//! result to a [`PersistenceServiceHome`] and asks the home for a live
//! handle. The handle is returned to the caller and owned by it for the
//! rest of the invocation.

use std::sync::Arc;

use tracing::debug;

use crate::dps::{PersistenceServiceHome, RemotePersistenceService, REMOTE_LOOKUP_NAME};
use crate::naming::{self, CorbaName, NamingContext};

use super::DiscoveryError;

/// Locates the remote Data Persistence Service.
#[derive(Clone)]
pub struct RemoteDpsLocator {
    naming: Arc<dyn NamingContext>,
    service_name: String,
}

impl RemoteDpsLocator {
    /// Locator for the DPS bound under [`REMOTE_LOOKUP_NAME`].
    pub fn new(naming: Arc<dyn NamingContext>) -> Self {
        Self {
            naming,
            service_name: REMOTE_LOOKUP_NAME.to_string(),
        }
    }

    /// Override the well-known service name.
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Location of the DPS home on the given host and port.
    pub fn lookup_name(&self, host: &str, port: &str) -> CorbaName {
        CorbaName::new(host, port, self.service_name.as_str())
    }

    /// Resolve a live DPS handle.
    pub fn locate(
        &self,
        host: &str,
        port: &str,
    ) -> Result<Box<dyn RemotePersistenceService>, DiscoveryError> {
        let lookup = self.lookup_name(host, port).to_string();
        debug!(lookup = %lookup, "Performing remote naming lookup");

        let object = self
            .naming
            .lookup(&lookup)
            .map_err(|source| DiscoveryError::Naming {
                lookup: lookup.clone(),
                source,
            })?;

        let home = naming::narrow::<dyn PersistenceServiceHome>(object).map_err(|source| {
            DiscoveryError::Narrow {
                lookup: lookup.clone(),
                source,
            }
        })?;

        let service = home.create().map_err(|source| DiscoveryError::Create {
            lookup: lookup.clone(),
            source,
        })?;

        debug!(lookup = %lookup, "Remote DPS lookup successful");
        Ok(service)
    }
}
