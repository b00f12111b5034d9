//! Result types for generation runs

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;

/// What a generation run covered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationScope {
    /// The whole site
    Site,

    /// One node and its descendants
    Node(PathBuf),

    /// A single resource
    Resource(PathBuf),
}

impl fmt::Display for GenerationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationScope::Site => write!(f, "site"),
            GenerationScope::Node(path) => write!(f, "node {}", path.display()),
            GenerationScope::Resource(path) => write!(f, "resource {}", path.display()),
        }
    }
}

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub scope: GenerationScope,

    /// Directory output was written under
    pub deploy_dir: PathBuf,

    /// Nodes generated as a whole (node hooks fired)
    pub nodes_generated: usize,

    pub text_resources: usize,

    pub binary_resources: usize,

    /// Every file written, in generation order
    pub files_written: Vec<PathBuf>,

    pub started_at: DateTime<Utc>,

    pub finished_at: Option<DateTime<Utc>>,
}

impl GenerationReport {
    pub(crate) fn start(scope: GenerationScope, deploy_dir: PathBuf) -> Self {
        Self {
            scope,
            deploy_dir,
            nodes_generated: 0,
            text_resources: 0,
            binary_resources: 0,
            files_written: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn resources_generated(&self) -> usize {
        self.text_resources + self.binary_resources
    }

    /// Wall-clock duration of the run, once finished
    pub fn duration_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds())
    }
}
