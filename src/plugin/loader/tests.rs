//! Plugin loader tests

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use sitegen_plugin::{Hook, Node, Plugin};

use super::*;
use crate::plugin::testing::{HookLog, RecordingPlugin};

fn site_with(plugins: &[&str]) -> Site {
    let mut config = SiteConfig::default();
    config.plugins = plugins.iter().map(|p| p.to_string()).collect();
    Site::new("/srv/site", config)
}

/// Registry whose factories record the site root each plugin was built for
fn recording_registry(log: &HookLog, built_for: &Arc<Mutex<Vec<PathBuf>>>) -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    for name in ["A", "B", "C"] {
        let log = log.clone();
        let built_for = built_for.clone();
        registry.register(name, move |site: &Site| -> Result<Box<dyn Plugin>> {
            built_for
                .lock()
                .map_err(|_| anyhow!("poisoned"))?
                .push(site.root_dir.clone());
            Ok(Box::new(RecordingPlugin::new(name, log.clone())))
        });
    }
    registry
}

#[test]
fn test_load_all_preserves_configuration_order() {
    let log = HookLog::new();
    let built_for = Arc::new(Mutex::new(Vec::new()));
    let registry = recording_registry(&log, &built_for);
    let mut site = site_with(&["C", "A", "B"]);

    PluginLoader::load_all(&mut site, &registry).unwrap();

    assert_eq!(site.plugins.names(), vec!["C", "A", "B"]);
    assert_eq!(
        *built_for.lock().unwrap(),
        vec![PathBuf::from("/srv/site"); 3]
    );

    site.plugins.begin_node(&Node::new("", "/srv/site/content")).unwrap();
    assert_eq!(log.hooks_for("C"), vec![Hook::BeginNode]);
    assert_eq!(
        log.calls().iter().map(|c| c.plugin.as_str()).collect::<Vec<_>>(),
        vec!["C", "A", "B"]
    );
}

#[test]
fn test_duplicates_run_twice() {
    let log = HookLog::new();
    let built_for = Arc::new(Mutex::new(Vec::new()));
    let registry = recording_registry(&log, &built_for);
    let mut site = site_with(&["A", "B", "A"]);

    PluginLoader::load_all(&mut site, &registry).unwrap();
    site.plugins.begin_generation().unwrap();

    assert_eq!(site.plugins.len(), 3);
    assert_eq!(log.hooks_for("A").len(), 2);
}

#[test]
fn test_empty_configuration_loads_empty_chain() {
    let registry = PluginRegistry::with_builtins();
    let mut site = site_with(&[]);

    PluginLoader::load_all(&mut site, &registry).unwrap();

    assert!(site.plugins.is_empty());
}

#[test]
fn test_unknown_identifier_is_a_resolution_error() {
    let log = HookLog::new();
    let built_for = Arc::new(Mutex::new(Vec::new()));
    let registry = recording_registry(&log, &built_for);
    let mut site = site_with(&["A", "missing", "B"]);

    let err = PluginLoader::load_all(&mut site, &registry).unwrap_err();

    match err {
        PluginError::Resolution { name, position } => {
            assert_eq!(name, "missing");
            assert_eq!(position, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(site.plugins.is_empty());
}

#[test]
fn test_failing_factory_is_a_construction_error() {
    let mut registry = PluginRegistry::new();
    registry.register("broken", |_site: &Site| -> Result<Box<dyn Plugin>> {
        Err(anyhow!("missing settings"))
    });
    let mut site = site_with(&["broken"]);

    let err = PluginLoader::load_all(&mut site, &registry).unwrap_err();

    assert!(matches!(err, PluginError::Construction { position: 1, .. }));
    assert!(err.to_string().contains("missing settings"));
}

#[test]
fn test_builtin_settings_are_read_at_construction() {
    let registry = PluginRegistry::with_builtins();

    let mut site = site_with(&["trace"]);
    site.config.plugin_settings.insert(
        "trace".to_string(),
        serde_yaml::from_str("hooks: [begin_node]").unwrap(),
    );
    PluginLoader::load_all(&mut site, &registry).unwrap();
    assert_eq!(site.plugins.names(), vec!["trace"]);

    let mut site = site_with(&["trace"]);
    site.config.plugin_settings.insert(
        "trace".to_string(),
        serde_yaml::from_str("hooks: [not_a_hook]").unwrap(),
    );
    let err = PluginLoader::load_all(&mut site, &registry).unwrap_err();
    assert!(matches!(err, PluginError::Construction { position: 1, .. }));
    assert!(site.plugins.is_empty());
}

#[test]
fn test_check_resolves_without_constructing() {
    let mut registry = PluginRegistry::with_builtins();
    registry.register("panics", |_site: &Site| -> Result<Box<dyn Plugin>> {
        panic!("check must not construct plugins")
    });

    let mut config = SiteConfig::default();
    config.plugins = vec!["trace".to_string(), "panics".to_string()];
    assert!(PluginLoader::check(&config, &registry).is_ok());

    config.plugins.push("nope".to_string());
    let err = PluginLoader::check(&config, &registry).unwrap_err();
    assert_eq!(err.position(), Some(3));
}
