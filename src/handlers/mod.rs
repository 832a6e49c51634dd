//! Mediation flow event handlers.
//!
//! The mediation engine drives each handler through `init` once, then
//! `on_event` for every event of the flow, then `destroy`. Handlers run
//! inside the engine's transaction: returning an error rolls it back.

pub mod context;
pub mod eai_creation;
mod error;

pub use context::StaticHandlerContext;
pub use eai_creation::EaiCreationHandler;
pub use error::{HandlerError, HandlerErrorKind, Result};

use std::any::Any;

use crate::config::Configuration;

/// Context supplied by the engine at initialization.
pub trait EventHandlerContext {
    /// Configuration scoped to this handler instance.
    fn event_handler_configuration(&self) -> &dyn Configuration;
}

/// Handler for events entering a mediation flow.
pub trait EventInputHandler: Send + Sync {
    /// Read configuration. Called once before any event.
    fn init(&mut self, ctx: &dyn EventHandlerContext) -> Result<()>;

    /// Process one event.
    fn on_event(&self, input_event: &dyn Any) -> Result<()>;

    /// Release resources. Called once when the flow is torn down.
    fn destroy(&mut self) {}
}
