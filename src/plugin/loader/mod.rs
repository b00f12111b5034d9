//! Plugin loader
//!
//! Turns the ordered `plugins` list of the site configuration into live plugin
//! instances, in the declared order, and publishes them as the site's chain.
//! Identifiers are not deduplicated: a name listed twice runs twice.

use tracing::{debug, info};

use super::{PluginChain, PluginError, PluginRegistry};
use crate::config::SiteConfig;
use crate::site::Site;

#[cfg(test)]
mod tests;

/// Loads configured plugins into a site
pub struct PluginLoader;

impl PluginLoader {
    /// Resolve and construct every configured plugin, then assign the chain to
    /// `site.plugins`.
    ///
    /// On error the site's existing chain is left untouched.
    pub fn load_all(site: &mut Site, registry: &PluginRegistry) -> Result<(), PluginError> {
        let mut plugins = Vec::with_capacity(site.config.plugins.len());

        for (index, name) in site.config.plugins.iter().enumerate() {
            let position = index + 1;
            let factory = registry
                .resolve(name)
                .ok_or_else(|| PluginError::Resolution {
                    name: name.clone(),
                    position,
                })?;

            let plugin =
                factory
                    .create_plugin(site)
                    .map_err(|source| PluginError::Construction {
                        name: name.clone(),
                        position,
                        source,
                    })?;

            debug!(plugin = %name, position, "Constructed plugin");
            plugins.push(plugin);
        }

        info!(count = plugins.len(), "Loaded plugins");
        site.plugins = PluginChain::new(plugins);
        Ok(())
    }

    /// Check that every configured identifier resolves, without constructing
    /// any plugin.
    pub fn check(config: &SiteConfig, registry: &PluginRegistry) -> Result<(), PluginError> {
        for (index, name) in config.plugins.iter().enumerate() {
            if !registry.contains(name) {
                return Err(PluginError::Resolution {
                    name: name.clone(),
                    position: index + 1,
                });
            }
        }
        Ok(())
    }
}
