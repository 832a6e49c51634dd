//! Static handler context backed by a [`PropertyMap`].

use crate::config::{Configuration, PropertyMap};

use super::EventHandlerContext;

/// Handler context for hosts that source configuration themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticHandlerContext {
    configuration: PropertyMap,
}

impl StaticHandlerContext {
    pub fn new(configuration: PropertyMap) -> Self {
        Self { configuration }
    }

    pub fn configuration_mut(&mut self) -> &mut PropertyMap {
        &mut self.configuration
    }
}

impl EventHandlerContext for StaticHandlerContext {
    fn event_handler_configuration(&self) -> &dyn Configuration {
        &self.configuration
    }
}
