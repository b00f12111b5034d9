//! Site build context
//!
//! A `Site` is created once per build. It owns the configuration, the content
//! tree once discovered, and the plugin chain once loaded.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::SiteConfig;
use crate::plugin::{Node, PluginChain};

pub mod discover;

pub use discover::discover_tree;

/// Errors raised while inspecting the site tree
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    #[error("Content directory does not exist: {0:?}")]
    MissingContentDir(PathBuf),

    #[error("Site content has not been discovered yet")]
    NotDiscovered,

    #[error("No node at {0:?}")]
    UnknownNode(PathBuf),

    #[error("No resource at {0:?}")]
    UnknownResource(PathBuf),

    #[error("Failed to walk content tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Process-wide build context
#[derive(Debug)]
pub struct Site {
    /// Directory the configuration's relative paths are resolved against
    pub root_dir: PathBuf,

    /// Site configuration
    pub config: SiteConfig,

    /// Discovered content tree
    pub content: Option<Node>,

    /// Loaded plugins, in configuration order
    pub plugins: PluginChain,
}

impl Site {
    /// Create a site with no content discovered and no plugins loaded
    pub fn new(root_dir: impl Into<PathBuf>, config: SiteConfig) -> Self {
        Self {
            root_dir: root_dir.into(),
            config,
            content: None,
            plugins: PluginChain::default(),
        }
    }

    /// Load the configuration at `path`; the site root is its parent directory
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = SiteConfig::from_file(path)?;
        let root_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self::new(root_dir, config))
    }

    /// Name used in logs: the configured name or the root directory's name
    pub fn name(&self) -> String {
        self.config.name.clone().unwrap_or_else(|| {
            self.root_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "site".to_string())
        })
    }

    pub fn content_dir(&self) -> PathBuf {
        self.root_dir.join(&self.config.content_root)
    }

    pub fn deploy_dir(&self) -> PathBuf {
        self.root_dir.join(&self.config.deploy_root)
    }

    /// Walk the content directory and assign the resulting tree
    pub fn discover(&mut self) -> Result<&Node, SiteError> {
        let content_dir = self.content_dir();
        let tree = discover_tree(&content_dir, &self.config)?;
        info!(
            content_dir = %content_dir.display(),
            resources = tree.resource_count(),
            "Discovered site content"
        );
        Ok(self.content.insert(tree))
    }

    /// The discovered content tree
    pub fn content(&self) -> Result<&Node, SiteError> {
        self.content.as_ref().ok_or(SiteError::NotDiscovered)
    }
}
