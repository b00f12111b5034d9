//! Site tree values handed to node- and resource-scoped hooks

use std::path::{Path, PathBuf};

/// Whether a resource's payload flows through the text hooks or the binary hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// UTF-8 payload threaded through `begin_text_resource` and `text_resource_complete`
    Text,

    /// Opaque payload plugins may mutate in place
    Binary,
}

/// A single generatable file within a node
#[derive(Debug, Clone)]
pub struct Resource {
    /// Path relative to the content root
    pub relative_path: PathBuf,

    /// Backing file on disk. Never written during a build.
    pub source_path: PathBuf,

    /// Text or binary
    pub kind: ResourceKind,

    /// In-memory payload
    pub bytes: Vec<u8>,
}

impl Resource {
    /// Create a text resource
    pub fn text(
        relative_path: impl Into<PathBuf>,
        source_path: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            source_path: source_path.into(),
            kind: ResourceKind::Text,
            bytes: text.into().into_bytes(),
        }
    }

    /// Create a binary resource
    pub fn binary(
        relative_path: impl Into<PathBuf>,
        source_path: impl Into<PathBuf>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            source_path: source_path.into(),
            kind: ResourceKind::Binary,
            bytes,
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == ResourceKind::Text
    }

    pub fn is_binary(&self) -> bool {
        self.kind == ResourceKind::Binary
    }

    /// Payload as text, if this is a text resource holding valid UTF-8
    pub fn as_text(&self) -> Option<&str> {
        match self.kind {
            ResourceKind::Text => std::str::from_utf8(&self.bytes).ok(),
            ResourceKind::Binary => None,
        }
    }

    /// File name of the resource
    pub fn name(&self) -> Option<&str> {
        self.relative_path.file_name().and_then(|n| n.to_str())
    }
}

/// A directory-like grouping of resources
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Path relative to the content root; empty for the root node
    pub relative_path: PathBuf,

    /// Backing directory on disk
    pub source_path: PathBuf,

    /// Resources directly inside this node
    pub resources: Vec<Resource>,

    /// Nested nodes
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(relative_path: impl Into<PathBuf>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            source_path: source_path.into(),
            resources: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.relative_path.as_os_str().is_empty()
    }

    /// Depth-first walk over this node and its descendants, parents first
    pub fn walk(&self) -> Vec<&Node> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.walk());
        }
        nodes
    }

    /// Every resource in this subtree, in walk order
    pub fn all_resources(&self) -> Vec<&Resource> {
        self.walk()
            .into_iter()
            .flat_map(|node| node.resources.iter())
            .collect()
    }

    /// Number of resources in this subtree
    pub fn resource_count(&self) -> usize {
        self.resources.len()
            + self
                .children
                .iter()
                .map(Node::resource_count)
                .sum::<usize>()
    }

    /// Find a node in this subtree by its path relative to the content root
    pub fn find_node(&self, relative_path: &Path) -> Option<&Node> {
        if self.relative_path == relative_path {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_node(relative_path))
    }

    /// Find a resource in this subtree by its path relative to the content root
    pub fn find_resource(&self, relative_path: &Path) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|r| r.relative_path == relative_path)
            .or_else(|| {
                self.children
                    .iter()
                    .find_map(|child| child.find_resource(relative_path))
            })
    }
}
