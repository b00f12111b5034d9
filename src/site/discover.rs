//! Content tree discovery

use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::SiteError;
use crate::config::SiteConfig;
use crate::plugin::{Node, Resource};

/// Build the node/resource tree rooted at `content_dir`.
///
/// Entries are visited in file-name order; hidden files and directories are
/// skipped. A file is a text resource when its extension is not configured as
/// binary and its bytes are valid UTF-8.
pub fn discover_tree(content_dir: &Path, config: &SiteConfig) -> Result<Node, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingContentDir(content_dir.to_path_buf()));
    }
    build_node(content_dir, content_dir, config)
}

fn build_node(root: &Path, dir: &Path, config: &SiteConfig) -> Result<Node, SiteError> {
    let relative = dir
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let mut node = Node::new(relative, dir);

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            node.children.push(build_node(root, path, config)?);
        } else if entry.file_type().is_file() {
            node.resources.push(load_resource(root, path, config)?);
        }
    }

    debug!(
        node = %node.relative_path.display(),
        resources = node.resources.len(),
        children = node.children.len(),
        "Discovered node"
    );
    Ok(node)
}

fn load_resource(root: &Path, path: &Path, config: &SiteConfig) -> Result<Resource, SiteError> {
    let relative = path
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;

    let binary_by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.is_binary_extension(ext));

    if binary_by_extension {
        return Ok(Resource::binary(relative, path, bytes));
    }

    match String::from_utf8(bytes) {
        Ok(text) => Ok(Resource::text(relative, path, text)),
        Err(err) => Ok(Resource::binary(relative, path, err.into_bytes())),
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
