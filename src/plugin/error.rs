//! Plugin loading and hook execution errors

use sitegen_plugin::Hook;

/// Errors raised while loading plugins or running a hook across the chain
#[derive(thiserror::Error, Debug)]
pub enum PluginError {
    /// A configured identifier has no registered factory
    #[error("Unknown plugin '{name}' (position {position} in the plugin list)")]
    Resolution { name: String, position: usize },

    /// A factory failed to construct its plugin
    #[error("Failed to construct plugin '{name}' (position {position}): {source}")]
    Construction {
        name: String,
        position: usize,
        #[source]
        source: anyhow::Error,
    },

    /// A plugin failed inside a hook; later plugins did not receive the hook
    #[error("Plugin '{plugin}' (position {position}) failed in {hook}: {source}")]
    Hook {
        plugin: String,
        hook: Hook,
        position: usize,
        #[source]
        source: anyhow::Error,
    },

    /// A notification hook was run through the text-threading path
    #[error("{0} does not thread resource text")]
    NotATextHook(Hook),
}

impl PluginError {
    /// 1-based position of the offending plugin in the configured list
    pub fn position(&self) -> Option<usize> {
        match self {
            PluginError::Resolution { position, .. }
            | PluginError::Construction { position, .. }
            | PluginError::Hook { position, .. } => Some(*position),
            PluginError::NotATextHook(_) => None,
        }
    }
}
