//! Generate command implementation

use crate::cli::utils;
use crate::{GenerationScope, PassthroughTemplate, SiteGenerator, Sitegen};
use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::{Component, Path, PathBuf};
use tracing::info;

pub fn command() -> Command {
    Command::new("generate")
        .about("Generate the site, one node, or one resource")
        .arg(utils::config_arg())
        .arg(
            clap::Arg::new("node")
                .long("node")
                .help("Generate only the node at this path (relative to the content root)")
                .value_name("PATH")
                .conflicts_with("resource"),
        )
        .arg(
            clap::Arg::new("resource")
                .long("resource")
                .help("Generate only the resource at this path (relative to the content root)")
                .value_name("PATH"),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let config_path = utils::get_config_path(matches)?;
    let scope = scope_from(matches);

    info!("Generating {} from {:?}", scope, config_path);

    let app = Sitegen::with_builtins();
    let mut site = app.open_site(&config_path)?;
    let mut generator = SiteGenerator::new(Box::new(PassthroughTemplate));
    let report = app.generate(&mut site, &mut generator, &scope)?;

    println!("Generation completed!");
    println!("Scope: {}", report.scope);
    println!("Nodes generated: {}", report.nodes_generated);
    println!("Text resources: {}", report.text_resources);
    println!("Binary resources: {}", report.binary_resources);
    println!("Output: {}", report.deploy_dir.display());
    if let Some(ms) = report.duration_ms() {
        println!("Time: {ms}ms");
    }

    Ok(())
}

fn scope_from(matches: &ArgMatches) -> GenerationScope {
    if let Some(node) = matches.get_one::<String>("node") {
        GenerationScope::Node(content_path(node))
    } else if let Some(resource) = matches.get_one::<String>("resource") {
        GenerationScope::Resource(content_path(resource))
    } else {
        GenerationScope::Site
    }
}

/// Content-relative path as stored in the tree: `.` is the root node
fn content_path(arg: &str) -> PathBuf {
    Path::new(arg)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
