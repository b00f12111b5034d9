use sitegen::cli::CliApp;
use tempfile::TempDir;

fn run(args: &[&str]) -> anyhow::Result<()> {
    let matches = CliApp::app().try_get_matches_from(args)?;
    CliApp::run(&matches)
}

#[test]
fn test_init_validate_generate() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();
    let config = temp_dir.path().join("site.yaml");
    let config = config.to_str().unwrap();

    run(&["sitegen", "init", "--dir", dir]).unwrap();
    assert!(temp_dir.path().join("content/index.html").exists());

    // a second init without --force must not clobber the configuration
    assert!(run(&["sitegen", "init", "--dir", dir]).is_err());
    run(&["sitegen", "init", "--dir", dir, "--force"]).unwrap();

    run(&["sitegen", "validate", "--config", config]).unwrap();
    run(&["sitegen", "generate", "--config", config]).unwrap();
    assert!(temp_dir.path().join("deploy/index.html").exists());

    run(&["sitegen", "generate", "--config", config, "--resource", "index.html"]).unwrap();
    run(&["sitegen", "generate", "--config", config, "--resource", "./index.html"]).unwrap();
    run(&["sitegen", "generate", "--config", config, "--node", "."]).unwrap();
}

#[test]
fn test_validate_rejects_unknown_plugins() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("site.yaml");
    std::fs::write(&config, "version: \"1.0\"\nplugins:\n  - trace\n  - nope\n").unwrap();

    let err = run(&["sitegen", "validate", "--config", config.to_str().unwrap()]).unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_informational_commands() {
    run(&["sitegen", "plugins"]).unwrap();
    run(&["sitegen", "plugins", "--json"]).unwrap();
    run(&["sitegen", "info", "--detailed"]).unwrap();
}
