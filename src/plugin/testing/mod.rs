//! Plugin test doubles
//!
//! `RecordingPlugin` logs every hook it receives into a shared `HookLog`, can
//! append a suffix to the payload a given hook sees, and can be told to fail on
//! a given hook. Chain, loader and generator tests assert against the log.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use sitegen_plugin::{Hook, Node, Plugin, Resource, Template};

/// One hook invocation as observed by a recording plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookCall {
    /// Plugin that received the hook
    pub plugin: String,

    /// Hook received
    pub hook: Hook,

    /// Node path, resource path or template name the hook was about
    pub subject: Option<String>,

    /// Text handed to a text hook
    pub text: Option<String>,
}

impl HookCall {
    /// Compact `plugin.hook(subject)` rendering used in assertions
    pub fn label(&self) -> String {
        match &self.subject {
            Some(subject) => format!("{}.{}({})", self.plugin, self.hook, subject),
            None => format!("{}.{}", self.plugin, self.hook),
        }
    }
}

/// Shared, ordered log of hook invocations
#[derive(Debug, Clone, Default)]
pub struct HookLog {
    calls: Arc<Mutex<Vec<HookCall>>>,
}

impl HookLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: HookCall) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }

    /// All calls in invocation order
    pub fn calls(&self) -> Vec<HookCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// `plugin.hook(subject)` labels in invocation order
    pub fn labels(&self) -> Vec<String> {
        self.calls().iter().map(HookCall::label).collect()
    }

    /// Hooks received by one plugin, in order
    pub fn hooks_for(&self, plugin: &str) -> Vec<Hook> {
        self.calls()
            .into_iter()
            .filter(|call| call.plugin == plugin)
            .map(|call| call.hook)
            .collect()
    }

    /// Number of times a hook was received across all plugins
    pub fn count(&self, hook: Hook) -> usize {
        self.calls().iter().filter(|call| call.hook == hook).count()
    }

    pub fn is_empty(&self) -> bool {
        self.calls().is_empty()
    }
}

/// Plugin that records every hook it receives
#[derive(Debug, Clone)]
pub struct RecordingPlugin {
    name: String,
    log: HookLog,
    suffixes: HashMap<Hook, String>,
    fail_on: Option<Hook>,
}

impl RecordingPlugin {
    pub fn new(name: impl Into<String>, log: HookLog) -> Self {
        Self {
            name: name.into(),
            log,
            suffixes: HashMap::new(),
            fail_on: None,
        }
    }

    /// Append `suffix` to the text (or bytes) this plugin sees in `hook`
    pub fn appending(mut self, hook: Hook, suffix: impl Into<String>) -> Self {
        self.suffixes.insert(hook, suffix.into());
        self
    }

    /// Fail with an error whenever `hook` is received
    pub fn failing_on(mut self, hook: Hook) -> Self {
        self.fail_on = Some(hook);
        self
    }

    fn observe(&self, hook: Hook, subject: Option<String>, text: Option<&str>) -> Result<()> {
        self.log.record(HookCall {
            plugin: self.name.clone(),
            hook,
            subject,
            text: text.map(str::to_string),
        });

        if self.fail_on == Some(hook) {
            bail!("{} refused {}", self.name, hook);
        }
        Ok(())
    }

    fn thread_text(&self, hook: Hook, resource: &Resource, text: &str) -> Result<Option<String>> {
        self.observe(hook, Some(resource_subject(resource)), Some(text))?;
        Ok(self
            .suffixes
            .get(&hook)
            .map(|suffix| format!("{text}{suffix}")))
    }

    fn touch_bytes(&self, hook: Hook, resource: &mut Resource) -> Result<()> {
        self.observe(hook, Some(resource_subject(resource)), None)?;
        if let Some(suffix) = self.suffixes.get(&hook) {
            resource.bytes.extend_from_slice(suffix.as_bytes());
        }
        Ok(())
    }
}

fn node_subject(node: &Node) -> String {
    node.relative_path.display().to_string()
}

fn resource_subject(resource: &Resource) -> String {
    resource.relative_path.display().to_string()
}

impl Plugin for RecordingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn template_loaded(&mut self, template: &dyn Template) -> Result<()> {
        self.observe(Hook::TemplateLoaded, Some(template.name().to_string()), None)
    }

    fn begin_generation(&mut self) -> Result<()> {
        self.observe(Hook::BeginGeneration, None, None)
    }

    fn begin_site(&mut self, _content: &Node) -> Result<()> {
        self.observe(Hook::BeginSite, None, None)
    }

    fn begin_node(&mut self, node: &Node) -> Result<()> {
        self.observe(Hook::BeginNode, Some(node_subject(node)), None)
    }

    fn begin_text_resource(
        &mut self,
        resource: &Resource,
        text: &str,
    ) -> Result<Option<String>> {
        self.thread_text(Hook::BeginTextResource, resource, text)
    }

    fn begin_binary_resource(&mut self, resource: &mut Resource) -> Result<()> {
        self.touch_bytes(Hook::BeginBinaryResource, resource)
    }

    fn text_resource_complete(
        &mut self,
        resource: &Resource,
        text: &str,
    ) -> Result<Option<String>> {
        self.thread_text(Hook::TextResourceComplete, resource, text)
    }

    fn binary_resource_complete(&mut self, resource: &mut Resource) -> Result<()> {
        self.touch_bytes(Hook::BinaryResourceComplete, resource)
    }

    fn node_complete(&mut self, node: &Node) -> Result<()> {
        self.observe(Hook::NodeComplete, Some(node_subject(node)), None)
    }

    fn site_complete(&mut self, _content: &Node) -> Result<()> {
        self.observe(Hook::SiteComplete, None, None)
    }

    fn generation_complete(&mut self) -> Result<()> {
        self.observe(Hook::GenerationComplete, None, None)
    }
}
