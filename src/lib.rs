//! Sitegen Library
//!
//! A static site generator whose build lifecycle is extensible through an
//! ordered chain of plugins. Plugins are named in the site configuration,
//! resolved through a registry, and invoked at every lifecycle hook in the
//! configured order.

pub mod cli;
pub mod config;
pub mod generator;
pub mod plugin;
pub mod site;

pub use config::SiteConfig;
pub use generator::{GenerationError, GenerationReport, GenerationScope, SiteGenerator};
pub use plugin::{
    Hook, Node, PassthroughTemplate, Plugin, PluginChain, PluginError, PluginFactory,
    PluginLoader, PluginRegistry, Resource, ResourceKind, Template,
};
pub use site::{Site, SiteError};

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Main application context that ties configuration, plugins and generation together
pub struct Sitegen {
    registry: PluginRegistry,
}

impl Sitegen {
    /// Create an application resolving plugins through `registry`
    pub fn new(registry: PluginRegistry) -> Self {
        Self { registry }
    }

    /// Create an application with only the built-in plugins registered
    pub fn with_builtins() -> Self {
        Self::new(PluginRegistry::with_builtins())
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Register additional plugin factories before opening a site
    pub fn registry_mut(&mut self) -> &mut PluginRegistry {
        &mut self.registry
    }

    /// Open the site described by a configuration file and load its plugins
    pub fn open_site(&self, config_path: &Path) -> Result<Site> {
        let mut site = Site::from_config_file(config_path)
            .with_context(|| format!("Failed to load configuration {config_path:?}"))?;
        info!(site = %site.name(), plugins = site.config.plugins.len(), "Opened site");

        PluginLoader::load_all(&mut site, &self.registry)?;
        Ok(site)
    }

    /// Run one generation pass over `site`
    pub fn generate(
        &self,
        site: &mut Site,
        generator: &mut SiteGenerator,
        scope: &GenerationScope,
    ) -> Result<GenerationReport> {
        let report = match scope {
            GenerationScope::Site => generator.generate_all(site)?,
            GenerationScope::Node(path) => generator.generate_node(site, path)?,
            GenerationScope::Resource(path) => generator.generate_resource(site, path)?,
        };
        Ok(report)
    }
}

impl Default for Sitegen {
    fn default() -> Self {
        Self::with_builtins()
    }
}
