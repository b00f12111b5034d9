use anyhow::{Context, Result};
use sitegen::plugin::testing::{HookLog, RecordingPlugin};
use sitegen::{Hook, Node, Plugin, PluginError, PluginLoader, PluginRegistry, Resource, Site, SiteConfig};

/// Registry exposing recording plugins "A" and "B"; "A" fails on `begin_node`
/// when `a_fails_on_node` is set.
fn registry(log: &HookLog, a_fails_on_node: bool) -> PluginRegistry {
    let mut registry = PluginRegistry::new();

    let a_log = log.clone();
    registry.register("A", move |_site: &Site| -> Result<Box<dyn Plugin>> {
        let mut plugin =
            RecordingPlugin::new("A", a_log.clone()).appending(Hook::BeginTextResource, "-A");
        if a_fails_on_node {
            plugin = plugin.failing_on(Hook::BeginNode);
        }
        Ok(Box::new(plugin))
    });

    let b_log = log.clone();
    registry.register("B", move |_site: &Site| -> Result<Box<dyn Plugin>> {
        Ok(Box::new(
            RecordingPlugin::new("B", b_log.clone()).appending(Hook::BeginTextResource, "-B"),
        ))
    });

    registry
}

fn site_from_yaml(yaml: &str) -> Result<Site> {
    let config: SiteConfig = serde_yaml::from_str(yaml).context("parsing site config")?;
    config.validate()?;
    Ok(Site::new("/srv/example", config))
}

#[test]
fn test_scenario_a_text_threading() {
    let log = HookLog::new();
    let mut site = site_from_yaml("plugins: [A, B]").unwrap();

    PluginLoader::load_all(&mut site, &registry(&log, false)).unwrap();

    let page = Resource::text("index.html", "/srv/example/content/index.html", "x");
    let text = site
        .plugins
        .begin_text_resource(&page, "x".to_string())
        .unwrap();
    assert_eq!(text, "x-A-B");
}

#[test]
fn test_scenario_b_fail_fast() {
    let log = HookLog::new();
    let mut site = site_from_yaml("plugins: [A, B]").unwrap();

    PluginLoader::load_all(&mut site, &registry(&log, true)).unwrap();

    let node = Node::new("docs", "/srv/example/content/docs");
    let err = site.plugins.begin_node(&node).unwrap_err();

    assert!(matches!(
        err,
        PluginError::Hook {
            hook: Hook::BeginNode,
            position: 1,
            ..
        }
    ));
    assert!(log.hooks_for("B").is_empty());
}

#[test]
fn test_scenario_c_empty_configuration() {
    let log = HookLog::new();
    let mut site = site_from_yaml("plugins: []").unwrap();

    PluginLoader::load_all(&mut site, &registry(&log, false)).unwrap();
    assert!(site.plugins.is_empty());

    let root = Node::new("", "/srv/example/content");
    let page = Resource::text("index.html", "/srv/example/content/index.html", "x");
    let mut image = Resource::binary("a.png", "/srv/example/content/a.png", vec![1]);

    site.plugins.begin_generation().unwrap();
    site.plugins.begin_site(&root).unwrap();
    site.plugins.begin_node(&root).unwrap();
    assert_eq!(
        site.plugins
            .begin_text_resource(&page, "x".to_string())
            .unwrap(),
        "x"
    );
    site.plugins.begin_binary_resource(&mut image).unwrap();
    assert_eq!(
        site.plugins
            .text_resource_complete(&page, "x".to_string())
            .unwrap(),
        "x"
    );
    site.plugins.binary_resource_complete(&mut image).unwrap();
    site.plugins.node_complete(&root).unwrap();
    site.plugins.site_complete(&root).unwrap();
    site.plugins.generation_complete().unwrap();

    assert!(log.is_empty());
    assert_eq!(image.bytes, vec![1]);
}

#[test]
fn test_every_notification_hook_runs_once_per_plugin_in_order() {
    let log = HookLog::new();
    let mut site = site_from_yaml("plugins: [B, A]").unwrap();
    PluginLoader::load_all(&mut site, &registry(&log, false)).unwrap();

    let root = Node::new("", "/srv/example/content");
    site.plugins.begin_site(&root).unwrap();
    site.plugins.site_complete(&root).unwrap();

    assert_eq!(
        log.labels(),
        vec!["B.begin_site", "A.begin_site", "B.site_complete", "A.site_complete"]
    );
}

#[test]
fn test_unknown_plugin_in_configuration() {
    let log = HookLog::new();
    let mut site = site_from_yaml("plugins: [A, typo, B]").unwrap();

    let err = PluginLoader::load_all(&mut site, &registry(&log, false)).unwrap_err();

    assert_eq!(err.to_string(), "Unknown plugin 'typo' (position 2 in the plugin list)");
}
