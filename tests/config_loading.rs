//! Property loading from YAML files and environment variables.

mod common;

use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

use eai_creation_handler::config::{
    ConfigError, Configuration, PropertyMap, CONFIG_ENV_VAR, LOG_ENV_VAR, NE_TYPE_ATTR,
    PLATFORM_TYPE_ATTR, REMOTE_HOST_ATTR, REMOTE_PORT_ATTR,
};
use eai_creation_handler::handlers::{EaiCreationHandler, EventInputHandler, StaticHandlerContext};

use common::*;

const HANDLER_YAML: &str = r#"
remoteHost: "127.0.0.1"
remotePort: "3528"
ptrFdn: "Me=test,MeC=test,ENodeBFunction=1"
neType: "NeType"
platformType: "PlatformType"
"#;

fn yaml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_load_from_explicit_path() {
    let file = yaml_file(HANDLER_YAML);

    let properties = PropertyMap::load(Some(file.path().to_str().unwrap())).unwrap();

    assert_eq!(
        properties.get_string_property(REMOTE_HOST_ATTR).as_deref(),
        Some("127.0.0.1")
    );
    assert_eq!(
        properties.get_string_property(REMOTE_PORT_ATTR).as_deref(),
        Some("3528")
    );
}

#[test]
#[serial]
fn test_load_missing_explicit_path_fails() {
    let result = PropertyMap::load(Some("/nonexistent/eai-handler.yaml"));

    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
#[serial]
fn test_env_supplies_property_missing_from_file() {
    let file = yaml_file(&HANDLER_YAML.replace("platformType: \"PlatformType\"\n", ""));
    std::env::set_var("EAI_PLATFORMTYPE", "CPP");

    let properties = PropertyMap::load(Some(file.path().to_str().unwrap()));
    std::env::remove_var("EAI_PLATFORMTYPE");

    assert_eq!(
        properties
            .unwrap()
            .get_string_property(PLATFORM_TYPE_ATTR)
            .as_deref(),
        Some("CPP")
    );
}

#[test]
#[serial]
fn test_load_from_config_env_var() {
    let file = yaml_file(HANDLER_YAML);
    std::env::set_var(CONFIG_ENV_VAR, file.path());

    let properties = PropertyMap::load(None);
    std::env::remove_var(CONFIG_ENV_VAR);

    let properties = properties.unwrap();
    assert_eq!(
        properties.get_string_property(NE_TYPE_ATTR).as_deref(),
        Some(NE_TYPE)
    );
    assert!(properties.get_string_property("config").is_none());
}

#[test]
#[serial]
fn test_log_filter_env_var_is_not_a_property() {
    let file = yaml_file(HANDLER_YAML);
    std::env::set_var(LOG_ENV_VAR, "debug");

    let properties = PropertyMap::load(Some(file.path().to_str().unwrap()));
    std::env::remove_var(LOG_ENV_VAR);

    let properties = properties.unwrap();
    assert!(properties.get_string_property("log").is_none());
    assert_eq!(
        properties.get_string_property(NE_TYPE_ATTR).as_deref(),
        Some(NE_TYPE)
    );
}

#[test]
#[serial]
fn test_loaded_properties_initialize_handler() {
    let file = yaml_file(HANDLER_YAML);
    let properties = PropertyMap::load(Some(file.path().to_str().unwrap())).unwrap();
    let deployment = good_dps();
    let mut handler = EaiCreationHandler::new(deployment.naming_context());

    handler
        .init(&StaticHandlerContext::new(properties))
        .unwrap();
    handler.on_event(&()).unwrap();

    assert_eq!(
        deployment.service.entity_address_info(MO_PO_ID),
        Some(EAI_PO_ID)
    );
}

#[test]
#[serial]
fn test_loaded_empty_value_rejected() {
    let file = yaml_file(&HANDLER_YAML.replace("\"NeType\"", "\"\""));
    let properties = PropertyMap::load(Some(file.path().to_str().unwrap())).unwrap();
    let deployment = good_dps();
    let mut handler = EaiCreationHandler::new(deployment.naming_context());

    let err = handler
        .init(&StaticHandlerContext::new(properties))
        .unwrap_err();

    assert!(err.message().ends_with(NE_TYPE_ATTR));
}
