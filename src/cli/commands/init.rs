//! Init command implementation

use crate::SiteConfig;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

const SAMPLE_INDEX: &str = "<!doctype html>\n<title>Home</title>\n<h1>It works</h1>\n";

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new site")
        .arg(
            clap::Arg::new("dir")
                .short('d')
                .long("dir")
                .help("Site directory")
                .value_name("DIR")
                .default_value("."),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing configuration file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let site_dir = matches
        .get_one::<String>("dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let force = matches.get_flag("force");

    let config_path = site_dir.join("site.yaml");
    if config_path.exists() && !force {
        return Err(anyhow!(
            "{:?} already exists; pass --force to overwrite it",
            config_path
        ));
    }

    info!("Initializing site in {:?}", site_dir);

    let config = SiteConfig::default();
    let content_dir = site_dir.join(&config.content_root);
    std::fs::create_dir_all(&content_dir)?;

    let index = content_dir.join("index.html");
    if !index.exists() {
        std::fs::write(&index, SAMPLE_INDEX)?;
    }

    config.save_to_file(&config_path)?;

    info!("Configuration file created: {:?}", config_path);
    println!("Site initialized in {}", site_dir.display());
    println!("List plugin identifiers under 'plugins' in site.yaml to extend the build.");

    Ok(())
}
