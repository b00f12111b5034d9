//! Lifecycle hook identifiers

use serde::Deserialize;
use std::fmt;

/// A named extension point in the build lifecycle.
///
/// Variants are declared in the order a full generation run fires them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hook {
    /// The site's template engine has been identified.
    TemplateLoaded,

    /// Generation is about to start.
    BeginGeneration,

    /// The resource tree is fully discovered.
    BeginSite,

    /// A whole node is about to be generated.
    BeginNode,

    /// A text resource is about to be rendered.
    BeginTextResource,

    /// A binary resource is about to be processed.
    BeginBinaryResource,

    /// A text resource has been rendered.
    TextResourceComplete,

    /// A binary resource has been processed.
    BinaryResourceComplete,

    /// Every resource of a whole node has been generated.
    NodeComplete,

    /// Every resource of the site has been generated.
    SiteComplete,

    /// The generation run is over.
    GenerationComplete,
}

impl Hook {
    /// All hooks in lifecycle order.
    pub const ALL: [Hook; 11] = [
        Hook::TemplateLoaded,
        Hook::BeginGeneration,
        Hook::BeginSite,
        Hook::BeginNode,
        Hook::BeginTextResource,
        Hook::BeginBinaryResource,
        Hook::TextResourceComplete,
        Hook::BinaryResourceComplete,
        Hook::NodeComplete,
        Hook::SiteComplete,
        Hook::GenerationComplete,
    ];

    /// Hook name as plugin authors know it
    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::TemplateLoaded => "template_loaded",
            Hook::BeginGeneration => "begin_generation",
            Hook::BeginSite => "begin_site",
            Hook::BeginNode => "begin_node",
            Hook::BeginTextResource => "begin_text_resource",
            Hook::BeginBinaryResource => "begin_binary_resource",
            Hook::TextResourceComplete => "text_resource_complete",
            Hook::BinaryResourceComplete => "binary_resource_complete",
            Hook::NodeComplete => "node_complete",
            Hook::SiteComplete => "site_complete",
            Hook::GenerationComplete => "generation_complete",
        }
    }

    /// Whether the hook threads resource text from one plugin to the next
    pub fn is_text_hook(&self) -> bool {
        matches!(self, Hook::BeginTextResource | Hook::TextResourceComplete)
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
