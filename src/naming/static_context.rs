//! Static naming context with in-process bindings.
//!
//! Objects are bound manually under their full lookup string. Each lookup
//! invokes the binding's factory, so every caller receives a fresh
//! [`RemoteObject`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info};

use super::{CorbaName, NamingContext, NamingError, RemoteObject, Result};

type ObjectFactory = Box<dyn Fn() -> RemoteObject + Send + Sync>;

/// In-process naming directory.
#[derive(Default)]
pub struct StaticNamingContext {
    bindings: RwLock<HashMap<String, ObjectFactory>>,
}

impl StaticNamingContext {
    /// Create an empty naming context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a factory under a lookup string.
    ///
    /// Replaces any existing binding for the same name.
    pub fn bind<F>(&self, name: &str, factory: F) -> Result<()>
    where
        F: Fn() -> RemoteObject + Send + Sync + 'static,
    {
        let parsed: CorbaName = name.parse()?;
        info!(
            host = %parsed.host,
            port = %parsed.port,
            name = %parsed.name,
            "Bound static naming entry"
        );
        self.bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Box::new(factory));
        Ok(())
    }

    /// Bind a shared capability so it can be narrowed back to `Arc<T>`.
    pub fn bind_object<T>(&self, name: &CorbaName, object: Arc<T>) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.bind(&name.to_string(), move || -> RemoteObject {
            Box::new(object.clone())
        })
    }

    /// Remove a binding. Returns whether one existed.
    pub fn unbind(&self, name: &str) -> bool {
        self.bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .is_some()
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }
}

impl NamingContext for StaticNamingContext {
    fn lookup(&self, name: &str) -> Result<RemoteObject> {
        if CorbaName::parse(name).is_none() {
            return Err(NamingError::InvalidName(name.to_string()));
        }

        let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);
        let factory = bindings
            .get(name)
            .ok_or_else(|| NamingError::NameNotFound(name.to_string()))?;

        debug!(name = %name, "Resolved static naming entry");
        Ok(factory())
    }
}
