//! Info command implementation

use crate::Hook;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("Sitegen - Static Site Generator");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    if detailed {
        println!("\nPlugin hooks, in lifecycle order:");
        for hook in Hook::ALL {
            let threading = if hook.is_text_hook() {
                " (threads text)"
            } else {
                ""
            };
            println!("  - {hook}{threading}");
        }
    }

    Ok(())
}
