//! Plugins command implementation

use crate::PluginRegistry;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("plugins")
        .about("List plugin identifiers available to the site configuration")
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print the list as JSON")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let registry = PluginRegistry::with_builtins();
    let names = registry.names();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("Available plugins ({}):", names.len());
    for name in names {
        println!("  - {name}");
    }

    Ok(())
}
