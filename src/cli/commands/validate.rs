//! Validate command implementation

use crate::cli::utils;
use crate::{PluginLoader, PluginRegistry};
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate the site configuration and its plugin list")
        .arg(utils::config_arg())
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let config = utils::load_config(matches)?;
    let registry = PluginRegistry::with_builtins();
    PluginLoader::check(&config, &registry)?;

    println!("Configuration file is valid!");
    println!("Version: {}", config.version);
    println!("Content root: {:?}", config.content_root);
    println!("Deploy root: {:?}", config.deploy_root);
    println!("Plugins: {}", config.plugins.len());

    for (index, plugin) in config.plugins.iter().enumerate() {
        println!("  {}. {}", index + 1, plugin);
    }

    Ok(())
}
