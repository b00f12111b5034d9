//! Plugin protocol for sitegen
//!
//! Defines the lifecycle hooks a plugin may observe during a site build, the
//! site tree values those hooks receive, and the template handle announced
//! through `template_loaded`.

pub mod hook;
pub mod traits;
pub mod tree;

pub use hook::Hook;
pub use traits::*;
pub use tree::{Node, Resource, ResourceKind};
