//! Sitegen CLI binary

use anyhow::Result;

use sitegen::cli::CliApp;

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Initialize logging
    let default_filter = if matches.get_flag("verbose") {
        "sitegen=debug"
    } else {
        "sitegen=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    // Run the CLI application
    CliApp::run(&matches)
}
