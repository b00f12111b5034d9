//! Plugin registry mapping configured identifiers to factories
//!
//! The registry is populated at startup, either with the built-in plugins or
//! by an embedding application, and consulted by the loader for every
//! identifier listed in the site configuration.

use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, warn};

use sitegen_plugin::Plugin;

use super::builtin::TracePlugin;
use crate::site::Site;

/// Plugin factory trait for creating plugins bound to a site
pub trait PluginFactory {
    /// Create a new plugin instance for `site`
    fn create_plugin(&self, site: &Site) -> Result<Box<dyn Plugin>>;
}

impl<F> PluginFactory for F
where
    F: Fn(&Site) -> Result<Box<dyn Plugin>>,
{
    fn create_plugin(&self, site: &Site) -> Result<Box<dyn Plugin>> {
        self(site)
    }
}

/// Registry of plugin factories keyed by identifier
#[derive(Default)]
pub struct PluginRegistry {
    factories: HashMap<String, Box<dyn PluginFactory>>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in plugins
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(TracePlugin::ID, TracePlugin::factory);
        registry
    }

    /// Register a factory under `name`, returning the factory it replaced
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        factory: F,
    ) -> Option<Box<dyn PluginFactory>>
    where
        F: PluginFactory + 'static,
    {
        let name = name.into();
        debug!(plugin = %name, "Registering plugin factory");
        let previous = self.factories.insert(name.clone(), Box::new(factory));
        if previous.is_some() {
            warn!(plugin = %name, "Replaced existing plugin factory");
        }
        previous
    }

    /// Look up the factory for an identifier
    pub fn resolve(&self, name: &str) -> Option<&dyn PluginFactory> {
        self.factories.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered identifiers, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names())
            .finish()
    }
}
