//! Configuration management for sitegen

pub mod config;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use config::{SiteConfig, CONFIG_FILE_NAMES};
