//! Remote Data Persistence Service (DPS) interface.
//!
//! The DPS is published in the naming directory as a
//! [`PersistenceServiceHome`]; calling `create` on the home yields a live
//! [`RemotePersistenceService`] handle. Only the three operations the
//! mediation handlers need are modelled here.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Well-known name the DPS home is bound under.
pub const REMOTE_LOOKUP_NAME: &str = "RemoteDataPersistenceService";

/// Result type for DPS operations.
pub type Result<T> = std::result::Result<T, DpsError>;

/// Errors raised by the remote persistence service or its transport.
#[derive(Debug, thiserror::Error)]
pub enum DpsError {
    /// Transport-level failure of the remote invocation.
    #[error("Remote invocation failed: {0}")]
    Remote(String),

    /// The service rejected the operation.
    #[error("Data persistence service error: {0}")]
    Service(String),

    /// The home could not create a service handle.
    #[error("Create failed: {0}")]
    Create(String),
}

/// Storage partition selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// The default, active partition.
    #[default]
    Live,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Live => f.write_str("live"),
        }
    }
}

/// Value of a persistent object attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    List(Vec<AttributeValue>),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(values: Vec<T>) -> Self {
        AttributeValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Attribute name to value mapping.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// Managed object as returned by a read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagedObject {
    pub namespace: String,
    pub type_name: String,
    pub version: String,
    /// Persistent object id assigned by the service.
    pub po_id: i64,
    pub fdn: String,
    pub name: String,
}

/// Live handle to the remote persistence service.
pub trait RemotePersistenceService: Send + Sync {
    /// Create a persistent object. Returns its id.
    fn create_po(
        &self,
        bucket: &Bucket,
        namespace: &str,
        type_name: &str,
        version: &str,
        attributes: Attributes,
    ) -> Result<i64>;

    /// Read a managed object by FDN. `Ok(None)` when no such object exists.
    fn get_mo(&self, bucket: &Bucket, fdn: &str) -> Result<Option<ManagedObject>>;

    /// Associate an EntityAddressInfo object with a managed object.
    fn set_entity_address_info(&self, bucket: &Bucket, mo_id: i64, eai_id: i64) -> Result<()>;
}

impl<S: RemotePersistenceService + ?Sized> RemotePersistenceService for Arc<S> {
    fn create_po(
        &self,
        bucket: &Bucket,
        namespace: &str,
        type_name: &str,
        version: &str,
        attributes: Attributes,
    ) -> Result<i64> {
        (**self).create_po(bucket, namespace, type_name, version, attributes)
    }

    fn get_mo(&self, bucket: &Bucket, fdn: &str) -> Result<Option<ManagedObject>> {
        (**self).get_mo(bucket, fdn)
    }

    fn set_entity_address_info(&self, bucket: &Bucket, mo_id: i64, eai_id: i64) -> Result<()> {
        (**self).set_entity_address_info(bucket, mo_id, eai_id)
    }
}

/// Factory bound in the naming directory.
pub trait PersistenceServiceHome: Send + Sync {
    /// Create a live service handle.
    fn create(&self) -> Result<Box<dyn RemotePersistenceService>>;
}
