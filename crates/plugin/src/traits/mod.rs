//! Plugin traits and interfaces

pub mod plugin;
pub mod template;


// Re-export main types for convenience
pub use plugin::*;
pub use template::*;
