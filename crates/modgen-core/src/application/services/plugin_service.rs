//! Plugin Service - admin views derived from plugin manifests.

use tracing::{debug, instrument};

use crate::{
    application::ports::ManifestSource,
    domain::{AdminPlugin, admin_plugins},
    error::ModgenResult,
};

pub struct PluginService {
    source: Box<dyn ManifestSource>,
}

impl PluginService {
    pub fn new(source: Box<dyn ManifestSource>) -> Self {
        Self { source }
    }

    /// Plugins exposing at least one admin route.
    #[instrument(skip_all)]
    pub fn admin_plugins(&self) -> ModgenResult<Vec<AdminPlugin>> {
        let manifests = self.source.load_all()?;
        let total = manifests.len();
        let plugins = admin_plugins(manifests);
        debug!(total, admin = plugins.len(), "Loaded plugin manifests");
        Ok(plugins)
    }
}
