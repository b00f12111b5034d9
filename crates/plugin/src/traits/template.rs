//! Template engine handle

use anyhow::Result;

use crate::tree::Resource;

/// The template engine a site renders text resources with.
///
/// The engine itself lives outside the plugin protocol; plugins only receive a
/// handle to it through `template_loaded`.
pub trait Template: Send {
    /// Engine name
    fn name(&self) -> &str;

    /// Render the working text of a resource
    fn render(&self, resource: &Resource, text: &str) -> Result<String>;
}

/// Template that renders text unchanged
#[derive(Debug, Clone, Default)]
pub struct PassthroughTemplate;

impl Template for PassthroughTemplate {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn render(&self, _resource: &Resource, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
