//! Configuration file management
//!
//! Reads optional report defaults from `.webpack-diff.toml`; command-line
//! flags take precedence over file values.

pub mod file;
pub mod loader;

pub use file::{ConfigFile, CONFIG_FILE_NAME, DEFAULT_NAME_WIDTH};
pub use loader::ConfigLoader;
