//! Naming lookup for remote services.
//!
//! Remote services are published under a `corbaname:` URL in a naming
//! directory. A lookup yields an opaque [`RemoteObject`] which must be
//! narrowed to the expected capability before use.
//!
//! - [`NamingContext`]: the directory seam
//! - [`StaticNamingContext`]: in-process bindings (local development, tests)
//! - [`CorbaName`]: lookup string construction and parsing

mod corbaname;
mod static_context;

pub use corbaname::{CorbaName, CORBANAME_PREFIX};
pub use static_context::StaticNamingContext;

use std::any::Any;
use std::sync::Arc;

/// Opaque object returned by a naming lookup.
///
/// Holds an `Arc<T>` of whatever capability was bound; use [`narrow`] to
/// recover it.
pub type RemoteObject = Box<dyn Any + Send>;

/// Result type for naming operations.
pub type Result<T> = std::result::Result<T, NamingError>;

/// Errors that can occur during naming operations.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Name not found: {0}")]
    NameNotFound(String),

    #[error("Resolved object is not a {expected}")]
    NarrowFailed { expected: &'static str },

    #[error("Naming service communication failure: {0}")]
    Communication(String),
}

/// Directory used to resolve remote service names.
pub trait NamingContext: Send + Sync {
    /// Resolve a name to the object bound under it.
    fn lookup(&self, name: &str) -> Result<RemoteObject>;
}

/// Narrow a resolved object to the capability `T`.
///
/// Succeeds only when the object was bound as an `Arc<T>`.
pub fn narrow<T: ?Sized + 'static>(object: RemoteObject) -> Result<Arc<T>> {
    object
        .downcast::<Arc<T>>()
        .map(|boxed| *boxed)
        .map_err(|_| NamingError::NarrowFailed {
            expected: std::any::type_name::<T>(),
        })
}
