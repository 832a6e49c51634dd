//! EntityAddressInfo creation handler.
//!
//! Runs as part of the synchronous add-node bootstrap flow, while the DPS
//! transaction is still open. For each event it:
//!
//! 1. looks up the remote DPS,
//! 2. creates a new `EntityAddressInfo` PO,
//! 3. sets that PO as the `EntityAddressInfo` of the MO being added.
//!
//! Any error aborts the remaining steps and is returned to the engine,
//! which rolls the transaction back.
//!
//! The DPS handle resolved in step 1 is passed down to steps 2 and 3 and
//! dropped at the end of the event. Nothing but the validated configuration
//! is kept on the handler, so `on_event` only needs `&self`.

mod association;
mod record;

pub use record::{eai_attributes, EAI_NAMESPACE, EAI_TYPE, EAI_VERSION, TARGET_NAMESPACE_KEYS};

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, info_span};

use crate::config::HandlerConfig;
use crate::discovery::RemoteDpsLocator;
use crate::dps::RemotePersistenceService;
use crate::naming::NamingContext;

use super::{EventHandlerContext, EventInputHandler, HandlerError, Result};

const HANDLER_NAME: &str = "EaiCreationHandler";
const REMOTE_DPS_LOOKUP_FAILURE_MSG: &str =
    "Error doing naming lookup of Remote Data Persistence service";
const NOT_INITIALIZED_MSG: &str = "EaiCreationHandler used before successful init";

/// Lifecycle state of the handler instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerState {
    Uninitialized,
    Configured(HandlerConfig),
    /// Initialization rejected the configuration.
    Failed(String),
}

/// Step of a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPhase {
    LocatingService,
    Creating,
    Associating,
    Done,
}

impl fmt::Display for EventPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventPhase::LocatingService => "locating_service",
            EventPhase::Creating => "creating",
            EventPhase::Associating => "associating",
            EventPhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Creates an EntityAddressInfo PO and sets it on the MO being added.
pub struct EaiCreationHandler {
    locator: RemoteDpsLocator,
    state: HandlerState,
}

impl EaiCreationHandler {
    /// Handler resolving the DPS through `naming`.
    pub fn new(naming: Arc<dyn NamingContext>) -> Self {
        Self::with_locator(RemoteDpsLocator::new(naming))
    }

    pub fn with_locator(locator: RemoteDpsLocator) -> Self {
        Self {
            locator,
            state: HandlerState::Uninitialized,
        }
    }

    pub fn state(&self) -> &HandlerState {
        &self.state
    }

    /// Validated configuration, once initialized.
    pub fn config(&self) -> Option<&HandlerConfig> {
        match &self.state {
            HandlerState::Configured(config) => Some(config),
            _ => None,
        }
    }

    fn configured(&self) -> Result<&HandlerConfig> {
        self.config().ok_or_else(|| {
            let message = match &self.state {
                HandlerState::Failed(reason) => format!("{}: {}", NOT_INITIALIZED_MSG, reason),
                _ => NOT_INITIALIZED_MSG.to_string(),
            };
            error!(handler = HANDLER_NAME, "{}", message);
            HandlerError::Configuration {
                message,
                source: None,
            }
        })
    }

    fn lookup_remote_dps(
        &self,
        config: &HandlerConfig,
    ) -> Result<Box<dyn RemotePersistenceService>> {
        self.locator
            .locate(&config.remote_host, &config.remote_port)
            .map_err(|source| {
                error!(
                    lookup = %source.lookup(),
                    error = %source,
                    "{}",
                    REMOTE_DPS_LOOKUP_FAILURE_MSG
                );
                HandlerError::Lookup {
                    message: REMOTE_DPS_LOOKUP_FAILURE_MSG.to_string(),
                    source,
                }
            })
    }
}

impl EventInputHandler for EaiCreationHandler {
    fn init(&mut self, ctx: &dyn EventHandlerContext) -> Result<()> {
        match HandlerConfig::extract(ctx.event_handler_configuration()) {
            Ok(config) => {
                debug!(
                    handler = HANDLER_NAME,
                    fdn = %config.target_fdn,
                    "Handler configured"
                );
                self.state = HandlerState::Configured(config);
                Ok(())
            }
            Err(source) => {
                let message = source.to_string();
                error!(handler = HANDLER_NAME, "{}", message);
                self.state = HandlerState::Failed(message.clone());
                Err(HandlerError::Configuration {
                    message,
                    source: Some(source),
                })
            }
        }
    }

    fn on_event(&self, _input_event: &dyn Any) -> Result<()> {
        let config = self.configured()?;
        let _span = info_span!("eai_creation", fdn = %config.target_fdn).entered();
        debug!(handler = HANDLER_NAME, "onEvent called");

        debug!(phase = %EventPhase::LocatingService, "Entering phase");
        let dps = self.lookup_remote_dps(config)?;

        debug!(phase = %EventPhase::Creating, "Entering phase");
        let eai_id = record::create_entity_address_info(dps.as_ref(), config)?;

        debug!(phase = %EventPhase::Associating, eai_id, "Entering phase");
        association::set_entity_address_info(dps.as_ref(), &config.target_fdn, eai_id)?;

        debug!(phase = %EventPhase::Done, handler = HANDLER_NAME, "onEvent finished");
        Ok(())
    }

    fn destroy(&mut self) {
        debug!(handler = HANDLER_NAME, "Handler destroyed");
    }
}
