//! Command handlers for the webpack-diff CLI

pub mod compare;
pub mod completions;

pub use compare::{cmd_compare, compare_with, CompareArgs};
pub use completions::cmd_completions;
