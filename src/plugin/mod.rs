//! Plugin chain, registry and loader
//!
//! The plugin protocol itself (the `Plugin` trait and the values its hooks
//! receive) lives in the `sitegen-plugin` crate and is re-exported here.

pub mod builtin;
pub mod chain;
pub mod error;
pub mod loader;
pub mod registry;
pub mod testing;

pub use builtin::TracePlugin;
pub use chain::PluginChain;
pub use error::PluginError;
pub use loader::PluginLoader;
pub use registry::{PluginFactory, PluginRegistry};

pub use sitegen_plugin::{
    Hook, Node, PassthroughTemplate, Plugin, Resource, ResourceKind, Template,
};
