//! Site configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File names searched, in order, when no configuration path is given
pub const CONFIG_FILE_NAMES: [&str; 3] = ["site.yaml", "site.yml", ".sitegen.yaml"];

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Configuration version
    pub version: String,

    /// Site name, used in logs
    pub name: Option<String>,

    /// Plugin identifiers, in execution order
    pub plugins: Vec<String>,

    /// Directory holding the source content, relative to the site root
    pub content_root: PathBuf,

    /// Directory generated output is written to, relative to the site root
    pub deploy_root: PathBuf,

    /// Extensions always treated as binary resources
    pub binary_extensions: Vec<String>,

    /// Free-form settings keyed by plugin identifier
    pub plugin_settings: HashMap<String, serde_yaml::Value>,
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.content_root.as_os_str().is_empty() {
            return Err(anyhow!("content_root must not be empty"));
        }

        if self.deploy_root.as_os_str().is_empty() {
            return Err(anyhow!("deploy_root must not be empty"));
        }

        if self.content_root == self.deploy_root {
            return Err(anyhow!(
                "content_root and deploy_root must differ: {:?}",
                self.content_root
            ));
        }

        if let Some(name) = self.plugins.iter().find(|p| p.trim().is_empty()) {
            return Err(anyhow!("Invalid plugin identifier: {:?}", name));
        }

        Ok(())
    }

    /// Settings configured for a plugin, if any
    pub fn plugin_setting(&self, plugin: &str) -> Option<&serde_yaml::Value> {
        self.plugin_settings.get(plugin)
    }

    /// Whether a file extension is configured as binary
    pub fn is_binary_extension(&self, extension: &str) -> bool {
        self.binary_extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            plugins: Vec::new(),
            content_root: PathBuf::from("content"),
            deploy_root: PathBuf::from("deploy"),
            binary_extensions: [
                "png", "jpg", "jpeg", "gif", "webp", "ico", "pdf", "woff", "woff2", "ttf",
                "zip", "gz",
            ]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
            plugin_settings: HashMap::new(),
        }
    }
}
