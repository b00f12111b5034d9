//! Built-in plugins

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use sitegen_plugin::{Hook, Node, Plugin, Resource, Template};

use crate::site::Site;

/// Settings read from `plugin_settings.trace` in the site configuration
///
/// ```yaml
/// plugin_settings:
///   trace:
///     hooks: [begin_node, node_complete]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TraceSettings {
    /// Hooks to log. All hooks are logged when unset.
    hooks: Option<Vec<Hook>>,
}

/// Logs every hook it receives. Never modifies content.
#[derive(Debug, Clone)]
pub struct TracePlugin {
    site_name: String,
    only: Option<Vec<Hook>>,
}

impl TracePlugin {
    pub const ID: &'static str = "trace";

    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            only: None,
        }
    }

    /// Restrict logging to the given hooks
    pub fn only(mut self, hooks: impl IntoIterator<Item = Hook>) -> Self {
        self.only = Some(hooks.into_iter().collect());
        self
    }

    /// Factory registered under [`TracePlugin::ID`]
    pub fn factory(site: &Site) -> Result<Box<dyn Plugin>> {
        let settings: TraceSettings = match site.config.plugin_setting(Self::ID) {
            Some(value) => serde_yaml::from_value(value.clone())
                .with_context(|| format!("Invalid settings for plugin '{}'", Self::ID))?,
            None => TraceSettings::default(),
        };

        let plugin = Self::new(site.name());
        Ok(Box::new(match settings.hooks {
            Some(hooks) => plugin.only(hooks),
            None => plugin,
        }))
    }

    /// Whether this plugin reports the given hook
    pub fn logs(&self, hook: Hook) -> bool {
        self.only
            .as_ref()
            .map_or(true, |hooks| hooks.contains(&hook))
    }

    fn log(&self, hook: Hook, subject: impl std::fmt::Display) {
        if self.logs(hook) {
            info!(site = %self.site_name, hook = %hook, subject = %subject, "Hook fired");
        }
    }
}

impl Plugin for TracePlugin {
    fn name(&self) -> &str {
        Self::ID
    }

    fn template_loaded(&mut self, template: &dyn Template) -> Result<()> {
        self.log(Hook::TemplateLoaded, template.name());
        Ok(())
    }

    fn begin_generation(&mut self) -> Result<()> {
        self.log(Hook::BeginGeneration, "-");
        Ok(())
    }

    fn begin_site(&mut self, content: &Node) -> Result<()> {
        self.log(
            Hook::BeginSite,
            format!("{} resources", content.resource_count()),
        );
        Ok(())
    }

    fn begin_node(&mut self, node: &Node) -> Result<()> {
        self.log(Hook::BeginNode, node.relative_path.display());
        Ok(())
    }

    fn begin_text_resource(
        &mut self,
        resource: &Resource,
        _text: &str,
    ) -> Result<Option<String>> {
        self.log(Hook::BeginTextResource, resource.relative_path.display());
        Ok(None)
    }

    fn begin_binary_resource(&mut self, resource: &mut Resource) -> Result<()> {
        self.log(Hook::BeginBinaryResource, resource.relative_path.display());
        Ok(())
    }

    fn text_resource_complete(
        &mut self,
        resource: &Resource,
        _text: &str,
    ) -> Result<Option<String>> {
        self.log(Hook::TextResourceComplete, resource.relative_path.display());
        Ok(None)
    }

    fn binary_resource_complete(&mut self, resource: &mut Resource) -> Result<()> {
        self.log(Hook::BinaryResourceComplete, resource.relative_path.display());
        Ok(())
    }

    fn node_complete(&mut self, node: &Node) -> Result<()> {
        self.log(Hook::NodeComplete, node.relative_path.display());
        Ok(())
    }

    fn site_complete(&mut self, content: &Node) -> Result<()> {
        self.log(
            Hook::SiteComplete,
            format!("{} resources", content.resource_count()),
        );
        Ok(())
    }

    fn generation_complete(&mut self) -> Result<()> {
        self.log(Hook::GenerationComplete, "-");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_plugin_leaves_content_alone() {
        let mut plugin = TracePlugin::new("demo");
        let page = Resource::text("index.html", "/demo/content/index.html", "<p>hi</p>");
        let mut logo = Resource::binary("logo.png", "/demo/content/logo.png", vec![1, 2]);

        assert_eq!(plugin.name(), "trace");
        assert_eq!(plugin.begin_text_resource(&page, "<p>hi</p>").unwrap(), None);
        assert_eq!(plugin.text_resource_complete(&page, "<p>hi</p>").unwrap(), None);
        plugin.begin_binary_resource(&mut logo).unwrap();
        plugin.binary_resource_complete(&mut logo).unwrap();
        assert_eq!(logo.bytes, vec![1, 2]);
    }

    #[test]
    fn test_trace_plugin_hook_filter() {
        let plugin = TracePlugin::new("demo");
        assert!(Hook::ALL.iter().all(|hook| plugin.logs(*hook)));

        let plugin = plugin.only([Hook::BeginNode, Hook::NodeComplete]);
        assert!(plugin.logs(Hook::BeginNode));
        assert!(plugin.logs(Hook::NodeComplete));
        assert!(!plugin.logs(Hook::BeginGeneration));
    }

    #[test]
    fn test_trace_settings_parse_hook_names() {
        let value: serde_yaml::Value =
            serde_yaml::from_str("hooks: [begin_site, site_complete]").unwrap();
        let settings: TraceSettings = serde_yaml::from_value(value).unwrap();
        assert_eq!(
            settings.hooks,
            Some(vec![Hook::BeginSite, Hook::SiteComplete])
        );

        let value: serde_yaml::Value = serde_yaml::from_str("hooks: [begin_lunch]").unwrap();
        assert!(serde_yaml::from_value::<TraceSettings>(value).is_err());
    }
}
