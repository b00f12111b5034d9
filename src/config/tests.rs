//! Configuration tests

use super::*;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_config_serialization() {
    let config = SiteConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config.version, parsed.version);
    assert_eq!(config.binary_extensions, parsed.binary_extensions);
}

#[test]
fn test_plugin_order_is_kept() {
    let yaml = r#"
version: "1.0"
plugins:
  - trace
  - minify
  - trace
plugin_settings:
  minify:
    level: 2
"#;
    let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.plugins, vec!["trace", "minify", "trace"]);
    assert_eq!(config.content_root, PathBuf::from("content"));
    assert!(config.plugin_setting("minify").is_some());
    assert!(config.plugin_setting("trace").is_none());
}

#[test]
fn test_config_from_file() {
    let mut config = SiteConfig::default();
    config.plugins.push("trace".to_string());

    let temp_file = NamedTempFile::new().unwrap();
    config.save_to_file(temp_file.path()).unwrap();

    let loaded = SiteConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(loaded.plugins, vec!["trace"]);
}

#[test]
fn test_config_validation() {
    assert!(SiteConfig::default().validate().is_ok());

    let mut config = SiteConfig::default();
    config.version = "2.0".to_string();
    assert!(config.validate().is_err());

    let mut config = SiteConfig::default();
    config.deploy_root = PathBuf::from("content");
    assert!(config.validate().is_err());

    let mut config = SiteConfig::default();
    config.plugins.push("  ".to_string());
    assert!(config.validate().is_err());
}

#[test]
fn test_binary_extensions() {
    let mut config = SiteConfig::default();
    config.binary_extensions.push(".SVGZ".to_string());

    assert!(config.is_binary_extension("png"));
    assert!(config.is_binary_extension("PNG"));
    assert!(config.is_binary_extension("svgz"));
    assert!(!config.is_binary_extension("md"));
}
