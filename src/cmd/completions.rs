//! Completions command implementation
//!
//! Handles `webpack-diff --completions <SHELL>`, which prints a shell
//! completion script for bash, zsh, fish, etc.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::cli::Cli;

/// Generate shell completion scripts on stdout
///
/// # Examples
///
/// ```bash
/// # Bash
/// webpack-diff --completions bash > /etc/bash_completion.d/webpack-diff
///
/// # Zsh
/// webpack-diff --completions zsh > ~/.zfunc/_webpack-diff
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

/// Write the completion script for `shell` into `out`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "webpack-diff", out);
}
