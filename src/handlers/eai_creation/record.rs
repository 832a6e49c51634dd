//! EntityAddressInfo persistent object creation.

use tracing::{debug, error};

use crate::config::HandlerConfig;
use crate::dps::{AttributeValue, Attributes, Bucket, RemotePersistenceService};
use crate::handlers::{HandlerError, Result};

/// Namespace of the EntityAddressInfo PO type.
pub const EAI_NAMESPACE: &str = "MEDIATION";
/// EntityAddressInfo PO type name.
pub const EAI_TYPE: &str = "EntityAddressingInformation";
/// EntityAddressInfo PO type version.
pub const EAI_VERSION: &str = "1.0.0";
/// Attribute holding `[neType, platformType]`.
pub const TARGET_NAMESPACE_KEYS: &str = "targetNamespaceKeys";

const EAI_CREATION_FAILURE_MSG: &str = "Unable to create EntityAddressInfo PO";

/// Attributes of a new EntityAddressInfo PO.
pub fn eai_attributes(config: &HandlerConfig) -> Attributes {
    let target_namespace_keys = vec![config.ne_type.clone(), config.platform_type.clone()];
    Attributes::from([(
        TARGET_NAMESPACE_KEYS.to_string(),
        AttributeValue::from(target_namespace_keys),
    )])
}

/// Create the EntityAddressInfo PO in the live bucket. Returns its id.
pub(crate) fn create_entity_address_info(
    dps: &dyn RemotePersistenceService,
    config: &HandlerConfig,
) -> Result<i64> {
    let attributes = eai_attributes(config);

    match dps.create_po(&Bucket::Live, EAI_NAMESPACE, EAI_TYPE, EAI_VERSION, attributes) {
        Ok(eai_id) => {
            debug!(eai_id, "Successfully created EAI");
            Ok(eai_id)
        }
        Err(source) => {
            error!(
                namespace = EAI_NAMESPACE,
                type_name = EAI_TYPE,
                version = EAI_VERSION,
                error = %source,
                "{}",
                EAI_CREATION_FAILURE_MSG
            );
            Err(HandlerError::Creation {
                message: format!(
                    "{}: {}/{}/{}",
                    EAI_CREATION_FAILURE_MSG, EAI_NAMESPACE, EAI_TYPE, EAI_VERSION
                ),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dps::DpsError;
    use crate::test_utils::{MockPersistenceService, RecordedCall};

    fn config() -> HandlerConfig {
        HandlerConfig {
            remote_host: "127.0.0.1".to_string(),
            remote_port: "3528".to_string(),
            target_fdn: "Me=test".to_string(),
            ne_type: "ERBS".to_string(),
            platform_type: "CPP".to_string(),
        }
    }

    #[test]
    fn test_eai_attributes_hold_ordered_keys() {
        let attributes = eai_attributes(&config());

        assert_eq!(attributes.len(), 1);
        assert_eq!(
            attributes.get(TARGET_NAMESPACE_KEYS),
            Some(&AttributeValue::List(vec![
                AttributeValue::String("ERBS".to_string()),
                AttributeValue::String("CPP".to_string()),
            ]))
        );
    }

    #[test]
    fn test_create_uses_fixed_type_in_live_bucket() {
        let dps = MockPersistenceService::new().with_next_po_id(1111);

        let id = create_entity_address_info(&dps, &config()).unwrap();

        assert_eq!(id, 1111);
        assert_eq!(
            dps.call_log().calls(),
            vec![RecordedCall::CreatePo {
                bucket: Bucket::Live,
                namespace: EAI_NAMESPACE.to_string(),
                type_name: EAI_TYPE.to_string(),
                version: EAI_VERSION.to_string(),
                attributes: eai_attributes(&config()),
            }]
        );
    }

    #[test]
    fn test_create_failure_maps_to_creation_error() {
        let dps = MockPersistenceService::new();
        dps.set_fail_on_create_po(true);

        let err = create_entity_address_info(&dps, &config()).unwrap_err();

        assert!(matches!(
            err,
            HandlerError::Creation {
                source: DpsError::Service(_),
                ..
            }
        ));
        assert!(err
            .message()
            .starts_with("Unable to create EntityAddressInfo PO"));
        assert!(dps.persistent_objects().is_empty());
    }
}
