//! Bootstrap utilities for hosts embedding the handlers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LOG_ENV_VAR;

/// Initialize tracing with the `EAI_LOG` environment variable.
///
/// Defaults to "info" level if `EAI_LOG` is not set. Returns `false` when a
/// global subscriber was already installed (by the host or an earlier call).
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
