//! Shared fixtures for handler integration tests.

#![allow(dead_code)]

use eai_creation_handler::config::{
    PropertyMap, NE_TYPE_ATTR, PLATFORM_TYPE_ATTR, PTR_FDN_ATTR, REMOTE_HOST_ATTR,
    REMOTE_PORT_ATTR,
};
use eai_creation_handler::dps::ManagedObject;
use eai_creation_handler::handlers::{EaiCreationHandler, EventInputHandler, StaticHandlerContext};
use eai_creation_handler::test_utils::{MockDpsDeployment, MockPersistenceService};

pub const REMOTE_HOST: &str = "127.0.0.1";
pub const REMOTE_PORT: &str = "3528";
pub const MO_FDN: &str = "Me=test,MeC=test,ENodeBFunction=1";
pub const NE_TYPE: &str = "NeType";
pub const PLATFORM_TYPE: &str = "PlatformType";
pub const EAI_PO_ID: i64 = 1111;
pub const MO_PO_ID: i64 = 2222;

/// All required properties with valid values.
pub fn valid_properties() -> PropertyMap {
    PropertyMap::new()
        .with(REMOTE_HOST_ATTR, REMOTE_HOST)
        .with(REMOTE_PORT_ATTR, REMOTE_PORT)
        .with(PTR_FDN_ATTR, MO_FDN)
        .with(NE_TYPE_ATTR, NE_TYPE)
        .with(PLATFORM_TYPE_ATTR, PLATFORM_TYPE)
}

pub fn valid_context() -> StaticHandlerContext {
    StaticHandlerContext::new(valid_properties())
}

pub fn target_mo() -> ManagedObject {
    ManagedObject {
        namespace: "namespace".to_string(),
        type_name: "type".to_string(),
        version: "version".to_string(),
        po_id: MO_PO_ID,
        fdn: MO_FDN.to_string(),
        name: "name".to_string(),
    }
}

/// Mock DPS at 127.0.0.1:3528 that returns id 1111 on create and knows the
/// target MO with id 2222.
pub fn good_dps() -> MockDpsDeployment {
    MockDpsDeployment::bind_service(
        REMOTE_HOST,
        REMOTE_PORT,
        MockPersistenceService::new()
            .with_next_po_id(EAI_PO_ID)
            .with_managed_object(target_mo()),
    )
}

/// Handler wired to `deployment` and initialized with valid properties.
pub fn initialized_handler(deployment: &MockDpsDeployment) -> EaiCreationHandler {
    let mut handler = EaiCreationHandler::new(deployment.naming_context());
    handler
        .init(&valid_context())
        .expect("valid properties must initialize the handler");
    handler
}
