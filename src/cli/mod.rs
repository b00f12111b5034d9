//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("sitegen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate static sites through an ordered chain of plugins")
            .arg(
                clap::Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Enable debug logging")
                    .global(true)
                    .action(clap::ArgAction::SetTrue),
            )
            .subcommand(commands::init::command())
            .subcommand(commands::generate::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::plugins::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches),
            Some(("generate", sub_matches)) => commands::generate::run(sub_matches),
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches),
            Some(("plugins", sub_matches)) => commands::plugins::run(sub_matches),
            Some(("info", sub_matches)) => commands::info::run(sub_matches),
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;

    use crate::config::CONFIG_FILE_NAMES;

    /// Shared `--config` argument
    pub fn config_arg() -> clap::Arg {
        clap::Arg::new("config")
            .short('c')
            .long("config")
            .help("Site configuration file path")
            .value_name("FILE")
    }

    /// Get configuration file path from arguments or use default
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Ok(PathBuf::from(config_path));
        }

        CONFIG_FILE_NAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
            .ok_or_else(|| {
                anyhow!("No configuration file found. Use --config to specify a file or create one with 'sitegen init'")
            })
    }

    /// Load configuration from file
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::SiteConfig> {
        let config_path = get_config_path(matches)?;
        crate::SiteConfig::from_file(&config_path)
    }
}
