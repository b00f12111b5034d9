//! Site generation pipeline
//!
//! Walks the discovered content tree and renders every resource into the
//! deploy directory, firing the plugin hooks at each lifecycle moment:
//!
//! ```text
//! template_loaded            once per generator
//! begin_generation
//!   begin_site               full-site runs only
//!     begin_node             per node generated as a whole
//!       begin_text_resource -> render -> text_resource_complete
//!       begin_binary_resource -> write -> binary_resource_complete
//!     node_complete
//!   site_complete            full-site runs only
//! generation_complete
//! ```
//!
//! Any hook failure aborts the run and is returned unchanged.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::plugin::{Node, PluginChain, PluginError, Resource, ResourceKind, Template};
use crate::site::{Site, SiteError};

pub mod report;


pub use report::{GenerationReport, GenerationScope};

/// Errors that abort a generation run
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("Template '{template}' failed to render {path:?}: {source}")]
    Template {
        template: String,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Drives a site through the generation lifecycle
pub struct SiteGenerator {
    template: Box<dyn Template>,
    template_announced: bool,
}

impl SiteGenerator {
    pub fn new(template: Box<dyn Template>) -> Self {
        Self {
            template,
            template_announced: false,
        }
    }

    pub fn template(&self) -> &dyn Template {
        self.template.as_ref()
    }

    /// Generate every node and resource of the site
    pub fn generate_all(&mut self, site: &mut Site) -> Result<GenerationReport, GenerationError> {
        info!(site = %site.name(), "Generating site");
        ensure_discovered(site)?;

        let mut report = GenerationReport::start(GenerationScope::Site, site.deploy_dir());
        let deploy_dir = site.deploy_dir();
        let content = site.content.as_ref().ok_or(SiteError::NotDiscovered)?;
        let plugins = &mut site.plugins;

        self.announce_template(plugins)?;
        plugins.begin_generation()?;
        plugins.begin_site(content)?;
        self.generate_subtree(plugins, content, &deploy_dir, &mut report)?;
        plugins.site_complete(content)?;
        plugins.generation_complete()?;

        let report = report.finish();
        info!(
            nodes = report.nodes_generated,
            resources = report.resources_generated(),
            "Site generation complete"
        );
        Ok(report)
    }

    /// Generate one node and everything beneath it
    pub fn generate_node(
        &mut self,
        site: &mut Site,
        node_path: &Path,
    ) -> Result<GenerationReport, GenerationError> {
        info!(node = %node_path.display(), "Generating node");
        ensure_discovered(site)?;

        let mut report = GenerationReport::start(
            GenerationScope::Node(node_path.to_path_buf()),
            site.deploy_dir(),
        );
        let deploy_dir = site.deploy_dir();
        let content = site.content.as_ref().ok_or(SiteError::NotDiscovered)?;
        let node = content
            .find_node(node_path)
            .ok_or_else(|| SiteError::UnknownNode(node_path.to_path_buf()))?;
        let plugins = &mut site.plugins;

        self.announce_template(plugins)?;
        plugins.begin_generation()?;
        self.generate_subtree(plugins, node, &deploy_dir, &mut report)?;
        plugins.generation_complete()?;

        Ok(report.finish())
    }

    /// Generate a single resource. Node and site hooks are not fired.
    pub fn generate_resource(
        &mut self,
        site: &mut Site,
        resource_path: &Path,
    ) -> Result<GenerationReport, GenerationError> {
        info!(resource = %resource_path.display(), "Generating resource");
        ensure_discovered(site)?;

        let mut report = GenerationReport::start(
            GenerationScope::Resource(resource_path.to_path_buf()),
            site.deploy_dir(),
        );
        let deploy_dir = site.deploy_dir();
        let content = site.content.as_ref().ok_or(SiteError::NotDiscovered)?;
        let resource = content
            .find_resource(resource_path)
            .ok_or_else(|| SiteError::UnknownResource(resource_path.to_path_buf()))?;
        let plugins = &mut site.plugins;

        self.announce_template(plugins)?;
        plugins.begin_generation()?;
        self.generate_one(plugins, resource, &deploy_dir, &mut report)?;
        plugins.generation_complete()?;

        Ok(report.finish())
    }

    /// Fire `template_loaded` the first time this generator runs
    fn announce_template(&mut self, plugins: &mut PluginChain) -> Result<(), GenerationError> {
        if !self.template_announced {
            debug!(template = self.template.name(), "Announcing template");
            plugins.template_loaded(self.template.as_ref())?;
            self.template_announced = true;
        }
        Ok(())
    }

    fn generate_subtree(
        &self,
        plugins: &mut PluginChain,
        node: &Node,
        deploy_dir: &Path,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        debug!(node = %node.relative_path.display(), "Generating node contents");
        fs::create_dir_all(deploy_dir.join(&node.relative_path))?;

        plugins.begin_node(node)?;
        for resource in &node.resources {
            self.generate_one(plugins, resource, deploy_dir, report)?;
        }
        plugins.node_complete(node)?;
        report.nodes_generated += 1;

        for child in &node.children {
            self.generate_subtree(plugins, child, deploy_dir, report)?;
        }
        Ok(())
    }

    fn generate_one(
        &self,
        plugins: &mut PluginChain,
        resource: &Resource,
        deploy_dir: &Path,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let target = deploy_dir.join(&resource.relative_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(resource = %resource.relative_path.display(), "Generating resource");

        match resource.kind {
            ResourceKind::Text => {
                let text = String::from_utf8_lossy(&resource.bytes).into_owned();
                let text = plugins.begin_text_resource(resource, text)?;
                let rendered = self.template.render(resource, &text).map_err(|source| {
                    GenerationError::Template {
                        template: self.template.name().to_string(),
                        path: resource.relative_path.clone(),
                        source,
                    }
                })?;
                let rendered = plugins.text_resource_complete(resource, rendered)?;
                fs::write(&target, rendered)?;
                report.text_resources += 1;
            }
            ResourceKind::Binary => {
                // Plugins edit a copy so every run starts from the discovered bytes
                let mut working = resource.clone();
                plugins.begin_binary_resource(&mut working)?;
                fs::write(&target, &working.bytes)?;
                plugins.binary_resource_complete(&mut working)?;
                report.binary_resources += 1;
            }
        }

        report.files_written.push(target);
        Ok(())
    }
}

/// Discover the site's content unless a previous run already did
fn ensure_discovered(site: &mut Site) -> Result<(), GenerationError> {
    if site.content.is_none() {
        site.discover()?;
    }
    Ok(())
}
