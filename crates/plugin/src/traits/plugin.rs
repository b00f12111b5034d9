//! The plugin capability interface
//!
//! A plugin observes and transforms content at fixed points of a site build.
//! Every hook has a default body, so an implementation only overrides the hooks
//! it cares about. Notification hooks default to doing nothing; the two text
//! hooks default to passing the in-flight text through untouched.
//!
//! Hooks are invoked one plugin at a time, in configuration order. A plugin
//! earlier in the order sees (and may replace) resource text before later ones.
//! Returning an error from any hook aborts the pipeline phase that fired it.

use anyhow::Result;

use super::Template;
use crate::tree::{Node, Resource};

/// Plugin trait that all plugins must implement
pub trait Plugin: Send {
    /// Identifier used in logs and hook failure reports
    fn name(&self) -> &str;

    /// Called once when the site's template engine has been identified.
    fn template_loaded(&mut self, _template: &dyn Template) -> Result<()> {
        Ok(())
    }

    /// Called once before any generation work starts.
    fn begin_generation(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once after the full content tree is discovered and before any
    /// resource is processed. `content` is the root node of that tree.
    fn begin_site(&mut self, _content: &Node) -> Result<()> {
        Ok(())
    }

    /// Called when a node is about to be processed. Only fired when the entire
    /// node is generated, never for single-resource generation.
    fn begin_node(&mut self, _node: &Node) -> Result<()> {
        Ok(())
    }

    /// Called before a text resource is rendered by the template.
    ///
    /// `text` is the loaded text as left by plugins earlier in the order.
    /// Returning `Some` replaces it for the next plugin; `None` leaves it as is.
    /// The source file itself is never modified.
    fn begin_text_resource(
        &mut self,
        _resource: &Resource,
        _text: &str,
    ) -> Result<Option<String>> {
        Ok(None)
    }

    /// Called before a binary resource is processed. The payload may be mutated
    /// in place; edits reach the output of the current run only.
    fn begin_binary_resource(&mut self, _resource: &mut Resource) -> Result<()> {
        Ok(())
    }

    /// Called after a text resource has been rendered by the template.
    ///
    /// Threads text exactly like [`Plugin::begin_text_resource`].
    fn text_resource_complete(
        &mut self,
        _resource: &Resource,
        _text: &str,
    ) -> Result<Option<String>> {
        Ok(None)
    }

    /// Called after a binary resource has been processed.
    fn binary_resource_complete(&mut self, _resource: &mut Resource) -> Result<()> {
        Ok(())
    }

    /// Called when every resource of a node has been processed. Only fired when
    /// the entire node is generated.
    fn node_complete(&mut self, _node: &Node) -> Result<()> {
        Ok(())
    }

    /// Called when the entire site has been processed.
    fn site_complete(&mut self, _content: &Node) -> Result<()> {
        Ok(())
    }

    /// Called once the whole generation run has finished.
    fn generation_complete(&mut self) -> Result<()> {
        Ok(())
    }
}
