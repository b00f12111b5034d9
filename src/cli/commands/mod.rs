//! CLI command modules

pub mod generate;
pub mod info;
pub mod init;
pub mod plugins;
pub mod validate;
