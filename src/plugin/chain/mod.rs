//! Plugin chain executor
//!
//! Holds the ordered plugin list of a build and runs each lifecycle hook
//! across it. Plugins run strictly one at a time in configuration order. The
//! first failure stops the invocation: later plugins never see that hook, and
//! the error goes back to the caller untouched apart from naming the plugin
//! and hook that raised it.

use std::fmt;

use sitegen_plugin::{Hook, Node, Plugin, Resource, Template};
use tracing::trace;

use super::PluginError;


/// Ordered plugin instances for one build
#[derive(Default)]
pub struct PluginChain {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginChain {
    /// Create a chain; `plugins` order is the invocation order for every hook
    pub fn new(plugins: Vec<Box<dyn Plugin>>) -> Self {
        Self { plugins }
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugin names in invocation order
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Invoke a notification hook on every plugin in order.
    ///
    /// `call` receives each plugin in turn and performs the hook call with the
    /// hook's arguments. Stops at the first error.
    pub fn run_notification_hook<F>(&mut self, hook: Hook, mut call: F) -> Result<(), PluginError>
    where
        F: FnMut(&mut dyn Plugin) -> anyhow::Result<()>,
    {
        for (index, plugin) in self.plugins.iter_mut().enumerate() {
            trace!(hook = %hook, plugin = plugin.name(), "Invoking hook");
            if let Err(source) = call(&mut **plugin) {
                return Err(hook_failure(&**plugin, hook, index, source));
            }
        }
        Ok(())
    }

    /// Invoke a text hook on every plugin in order, threading the text.
    ///
    /// A plugin returning non-empty text replaces the running text for the next
    /// plugin. Returning `None` or an empty string passes the text through.
    pub fn run_text_hook(
        &mut self,
        hook: Hook,
        resource: &Resource,
        text: String,
    ) -> Result<String, PluginError> {
        if !hook.is_text_hook() {
            return Err(PluginError::NotATextHook(hook));
        }

        let mut text = text;
        for (index, plugin) in self.plugins.iter_mut().enumerate() {
            trace!(hook = %hook, plugin = plugin.name(), "Invoking text hook");
            let result = match hook {
                Hook::BeginTextResource => plugin.begin_text_resource(resource, &text),
                _ => plugin.text_resource_complete(resource, &text),
            };

            match result {
                Ok(Some(updated)) if !updated.is_empty() => text = updated,
                Ok(_) => {}
                Err(source) => return Err(hook_failure(&**plugin, hook, index, source)),
            }
        }
        Ok(text)
    }

    pub fn template_loaded(&mut self, template: &dyn Template) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::TemplateLoaded, |p| p.template_loaded(template))
    }

    pub fn begin_generation(&mut self) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::BeginGeneration, |p| p.begin_generation())
    }

    pub fn begin_site(&mut self, content: &Node) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::BeginSite, |p| p.begin_site(content))
    }

    pub fn begin_node(&mut self, node: &Node) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::BeginNode, |p| p.begin_node(node))
    }

    /// Thread `text` through every plugin's `begin_text_resource`
    pub fn begin_text_resource(
        &mut self,
        resource: &Resource,
        text: String,
    ) -> Result<String, PluginError> {
        self.run_text_hook(Hook::BeginTextResource, resource, text)
    }

    pub fn begin_binary_resource(&mut self, resource: &mut Resource) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::BeginBinaryResource, |p| {
            p.begin_binary_resource(&mut *resource)
        })
    }

    /// Thread rendered `text` through every plugin's `text_resource_complete`
    pub fn text_resource_complete(
        &mut self,
        resource: &Resource,
        text: String,
    ) -> Result<String, PluginError> {
        self.run_text_hook(Hook::TextResourceComplete, resource, text)
    }

    pub fn binary_resource_complete(
        &mut self,
        resource: &mut Resource,
    ) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::BinaryResourceComplete, |p| {
            p.binary_resource_complete(&mut *resource)
        })
    }

    pub fn node_complete(&mut self, node: &Node) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::NodeComplete, |p| p.node_complete(node))
    }

    pub fn site_complete(&mut self, content: &Node) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::SiteComplete, |p| p.site_complete(content))
    }

    pub fn generation_complete(&mut self) -> Result<(), PluginError> {
        self.run_notification_hook(Hook::GenerationComplete, |p| p.generation_complete())
    }
}

impl fmt::Debug for PluginChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginChain")
            .field("plugins", &self.names())
            .finish()
    }
}

fn hook_failure(
    plugin: &dyn Plugin,
    hook: Hook,
    index: usize,
    source: anyhow::Error,
) -> PluginError {
    PluginError::Hook {
        plugin: plugin.name().to_string(),
        hook,
        position: index + 1,
        source,
    }
}
