//! In-memory property source with layered file/environment loading.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{
    ConfigError, Configuration, CONFIG_ENV_PREFIX, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, LOG_ENV_VAR,
};

/// Flat string properties.
///
/// Lookups try the exact key first and then fall back to an ASCII
/// case-insensitive match, since environment-derived keys arrive lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    properties: BTreeMap<String, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Load properties from files and environment.
    ///
    /// Sources (in order of priority, later overrides earlier):
    /// 1. `DEFAULT_CONFIG_FILE` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, except
    ///    `CONFIG_ENV_VAR` and `LOG_ENV_VAR`
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat, Map};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        // EAI_CONFIG and EAI_LOG steer loading and logging; they are not properties.
        let env: Map<String, String> = std::env::vars()
            .filter(|(key, _)| key != CONFIG_ENV_VAR && key != LOG_ENV_VAR)
            .collect();

        let properties = builder
            .add_source(Environment::with_prefix(CONFIG_ENV_PREFIX).source(Some(env)))
            .build()?
            .try_deserialize::<PropertyMap>()?;

        Ok(properties)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Configuration for PropertyMap {
    fn get_string_property(&self, key: &str) -> Option<String> {
        self.properties
            .get(key)
            .or_else(|| {
                self.properties
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(key))
                    .map(|(_, v)| v)
            })
            .cloned()
    }

    fn all_properties(&self) -> BTreeMap<String, String> {
        self.properties.clone()
    }
}
