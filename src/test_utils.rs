//! Test utilities and mock implementations.
//!
//! This module provides mock implementations of the naming and persistence
//! traits so handlers can be exercised without a remote DPS. All mocks can
//! share one [`CallLog`], which records every remote interaction in order.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::dps::{
    Attributes, Bucket, DpsError, ManagedObject, PersistenceServiceHome,
    RemotePersistenceService, Result as DpsResult, REMOTE_LOOKUP_NAME,
};
use crate::naming::{
    CorbaName, NamingContext, NamingError, RemoteObject, Result as NamingResult,
    StaticNamingContext,
};

/// A remote interaction observed by a mock.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Lookup(String),
    CreateService,
    CreatePo {
        bucket: Bucket,
        namespace: String,
        type_name: String,
        version: String,
        attributes: Attributes,
    },
    GetMo {
        bucket: Bucket,
        fdn: String,
    },
    SetEntityAddressInfo {
        bucket: Bucket,
        mo_id: i64,
        eai_id: i64,
    },
}

/// Ordered, shareable record of remote calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: RecordedCall) {
        self.lock().push(call);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&RecordedCall) -> bool) -> usize {
        self.lock().iter().filter(|call| predicate(*call)).count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Persistent object created through the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistentObject {
    pub po_id: i64,
    pub bucket: Bucket,
    pub namespace: String,
    pub type_name: String,
    pub version: String,
    pub attributes: Attributes,
}

/// Mock persistence service that stores objects in memory.
pub struct MockPersistenceService {
    log: CallLog,
    next_po_id: AtomicI64,
    managed_objects: Mutex<HashMap<String, ManagedObject>>,
    persistent_objects: Mutex<Vec<PersistentObject>>,
    associations: Mutex<HashMap<i64, i64>>,
    fail_on_create_po: AtomicBool,
    fail_on_get_mo: AtomicBool,
    fail_on_set_entity_address_info: AtomicBool,
}

impl Default for MockPersistenceService {
    fn default() -> Self {
        Self {
            log: CallLog::new(),
            next_po_id: AtomicI64::new(1),
            managed_objects: Mutex::new(HashMap::new()),
            persistent_objects: Mutex::new(Vec::new()),
            associations: Mutex::new(HashMap::new()),
            fail_on_create_po: AtomicBool::new(false),
            fail_on_get_mo: AtomicBool::new(false),
            fail_on_set_entity_address_info: AtomicBool::new(false),
        }
    }
}

impl MockPersistenceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_call_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    /// Id assigned to the next created object; later objects count up from it.
    pub fn with_next_po_id(self, po_id: i64) -> Self {
        self.next_po_id.store(po_id, Ordering::SeqCst);
        self
    }

    pub fn with_managed_object(self, mo: ManagedObject) -> Self {
        self.add_managed_object(mo);
        self
    }

    pub fn add_managed_object(&self, mo: ManagedObject) {
        lock(&self.managed_objects).insert(mo.fdn.clone(), mo);
    }

    pub fn set_fail_on_create_po(&self, fail: bool) {
        self.fail_on_create_po.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_on_get_mo(&self, fail: bool) {
        self.fail_on_get_mo.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_on_set_entity_address_info(&self, fail: bool) {
        self.fail_on_set_entity_address_info
            .store(fail, Ordering::SeqCst);
    }

    pub fn call_log(&self) -> &CallLog {
        &self.log
    }

    pub fn persistent_objects(&self) -> Vec<PersistentObject> {
        lock(&self.persistent_objects).clone()
    }

    /// EntityAddressInfo id associated with a managed object, if any.
    pub fn entity_address_info(&self, mo_id: i64) -> Option<i64> {
        lock(&self.associations).get(&mo_id).copied()
    }
}

impl RemotePersistenceService for MockPersistenceService {
    fn create_po(
        &self,
        bucket: &Bucket,
        namespace: &str,
        type_name: &str,
        version: &str,
        attributes: Attributes,
    ) -> DpsResult<i64> {
        self.log.record(RecordedCall::CreatePo {
            bucket: *bucket,
            namespace: namespace.to_string(),
            type_name: type_name.to_string(),
            version: version.to_string(),
            attributes: attributes.clone(),
        });
        if self.fail_on_create_po.load(Ordering::SeqCst) {
            return Err(DpsError::Service("Mock createPo failure".to_string()));
        }

        let po_id = self.next_po_id.fetch_add(1, Ordering::SeqCst);
        lock(&self.persistent_objects).push(PersistentObject {
            po_id,
            bucket: *bucket,
            namespace: namespace.to_string(),
            type_name: type_name.to_string(),
            version: version.to_string(),
            attributes,
        });
        Ok(po_id)
    }

    fn get_mo(&self, bucket: &Bucket, fdn: &str) -> DpsResult<Option<ManagedObject>> {
        self.log.record(RecordedCall::GetMo {
            bucket: *bucket,
            fdn: fdn.to_string(),
        });
        if self.fail_on_get_mo.load(Ordering::SeqCst) {
            return Err(DpsError::Service("Mock getMo failure".to_string()));
        }
        Ok(lock(&self.managed_objects).get(fdn).cloned())
    }

    fn set_entity_address_info(&self, bucket: &Bucket, mo_id: i64, eai_id: i64) -> DpsResult<()> {
        self.log.record(RecordedCall::SetEntityAddressInfo {
            bucket: *bucket,
            mo_id,
            eai_id,
        });
        if self.fail_on_set_entity_address_info.load(Ordering::SeqCst) {
            return Err(DpsError::Remote(
                "Mock setEntityAddressInfo failure".to_string(),
            ));
        }
        if !lock(&self.managed_objects)
            .values()
            .any(|mo| mo.po_id == mo_id)
        {
            return Err(DpsError::Service(format!("No MO with id {}", mo_id)));
        }
        lock(&self.associations).insert(mo_id, eai_id);
        Ok(())
    }
}

/// Mock service home handing out a shared [`MockPersistenceService`].
pub struct MockServiceHome {
    service: Arc<MockPersistenceService>,
    fail_on_create: AtomicBool,
}

impl MockServiceHome {
    pub fn new(service: Arc<MockPersistenceService>) -> Self {
        Self {
            service,
            fail_on_create: AtomicBool::new(false),
        }
    }

    pub fn set_fail_on_create(&self, fail: bool) {
        self.fail_on_create.store(fail, Ordering::SeqCst);
    }
}

impl PersistenceServiceHome for MockServiceHome {
    fn create(&self) -> DpsResult<Box<dyn RemotePersistenceService>> {
        self.service.call_log().record(RecordedCall::CreateService);
        if self.fail_on_create.load(Ordering::SeqCst) {
            return Err(DpsError::Create("Mock home create failure".to_string()));
        }
        Ok(Box::new(self.service.clone()))
    }
}

/// Naming context that records each lookup before delegating.
///
/// With `set_fail_on_lookup` it behaves like an unreachable naming service:
/// the lookup is still recorded, then fails with
/// [`NamingError::Communication`].
pub struct RecordingNamingContext {
    inner: Arc<dyn NamingContext>,
    log: CallLog,
    fail_on_lookup: AtomicBool,
}

impl RecordingNamingContext {
    pub fn new(inner: Arc<dyn NamingContext>, log: CallLog) -> Self {
        Self {
            inner,
            log,
            fail_on_lookup: AtomicBool::new(false),
        }
    }

    pub fn set_fail_on_lookup(&self, fail: bool) {
        self.fail_on_lookup.store(fail, Ordering::SeqCst);
    }
}

impl NamingContext for RecordingNamingContext {
    fn lookup(&self, name: &str) -> NamingResult<RemoteObject> {
        self.log.record(RecordedCall::Lookup(name.to_string()));
        if self.fail_on_lookup.load(Ordering::SeqCst) {
            return Err(NamingError::Communication(
                "Mock naming service unreachable".to_string(),
            ));
        }
        self.inner.lookup(name)
    }
}

/// A mock DPS bound into a static naming context, all sharing one call log.
pub struct MockDpsDeployment {
    pub log: CallLog,
    pub service: Arc<MockPersistenceService>,
    pub home: Arc<MockServiceHome>,
    pub directory: Arc<StaticNamingContext>,
    /// Recording front of `directory`, handed out by `naming_context`.
    pub naming: Arc<RecordingNamingContext>,
}

impl MockDpsDeployment {
    /// Bind a fresh mock DPS at `host:port` under [`REMOTE_LOOKUP_NAME`].
    pub fn bind(host: &str, port: &str) -> Self {
        Self::bind_service(host, port, MockPersistenceService::new())
    }

    /// Bind a preconfigured mock service. Its call log is replaced by the
    /// deployment's shared log.
    pub fn bind_service(host: &str, port: &str, service: MockPersistenceService) -> Self {
        let log = CallLog::new();
        let service = Arc::new(service.with_call_log(log.clone()));
        let home = Arc::new(MockServiceHome::new(service.clone()));
        let directory = Arc::new(StaticNamingContext::new());

        let as_home: Arc<dyn PersistenceServiceHome> = home.clone();
        directory
            .bind_object(&CorbaName::new(host, port, REMOTE_LOOKUP_NAME), as_home)
            .expect("mock DPS host and port must form a valid lookup name");

        let naming = Arc::new(RecordingNamingContext::new(
            directory.clone(),
            log.clone(),
        ));

        Self {
            log,
            service,
            home,
            directory,
            naming,
        }
    }

    /// Naming context that records lookups into the shared log.
    pub fn naming_context(&self) -> Arc<dyn NamingContext> {
        self.naming.clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mo(fdn: &str, po_id: i64) -> ManagedObject {
        ManagedObject {
            po_id,
            fdn: fdn.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_mock_create_po_assigns_sequential_ids() {
        let service = MockPersistenceService::new().with_next_po_id(1111);

        let first = service
            .create_po(&Bucket::Live, "ns", "t", "1", Attributes::new())
            .unwrap();
        let second = service
            .create_po(&Bucket::Live, "ns", "t", "1", Attributes::new())
            .unwrap();

        assert_eq!((first, second), (1111, 1112));
        assert_eq!(service.persistent_objects().len(), 2);
    }

    #[test]
    fn test_mock_get_mo_absent() {
        let service = MockPersistenceService::new();

        let result = service.get_mo(&Bucket::Live, "Me=none").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_mock_set_entity_address_info_requires_mo() {
        let service = MockPersistenceService::new().with_managed_object(mo("Me=1", 2222));

        assert!(service
            .set_entity_address_info(&Bucket::Live, 3333, 1)
            .is_err());
        service
            .set_entity_address_info(&Bucket::Live, 2222, 1111)
            .unwrap();
        assert_eq!(service.entity_address_info(2222), Some(1111));
    }

    #[test]
    fn test_mock_failures_are_still_recorded() {
        let service = MockPersistenceService::new();
        service.set_fail_on_get_mo(true);

        assert!(service.get_mo(&Bucket::Live, "Me=1").is_err());
        assert_eq!(service.call_log().len(), 1);
    }

    #[test]
    fn test_unreachable_naming_still_records_lookup() {
        let deployment = MockDpsDeployment::bind("10.0.0.1", "3528");
        deployment.naming.set_fail_on_lookup(true);
        let lookup = CorbaName::new("10.0.0.1", "3528", REMOTE_LOOKUP_NAME).to_string();

        let result = deployment.naming_context().lookup(&lookup);

        assert!(matches!(result, Err(NamingError::Communication(_))));
        assert_eq!(deployment.log.calls(), vec![RecordedCall::Lookup(lookup)]);
    }

    #[test]
    fn test_deployment_records_lookup_and_create() {
        let deployment = MockDpsDeployment::bind("10.0.0.1", "3528");
        let naming = deployment.naming_context();
        let lookup = CorbaName::new("10.0.0.1", "3528", REMOTE_LOOKUP_NAME).to_string();

        let object = naming.lookup(&lookup).unwrap();
        let home = crate::naming::narrow::<dyn PersistenceServiceHome>(object).unwrap();
        home.create().unwrap();

        assert_eq!(
            deployment.log.calls(),
            vec![RecordedCall::Lookup(lookup), RecordedCall::CreateService]
        );
    }
}
