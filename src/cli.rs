//! Command-line interface definition

use crate::cmd::CompareArgs;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Compare two webpack stats snapshots
///
/// webpack-diff reconciles the assets and modules of a baseline and a current
/// `webpack --json` report and lists what grew, shrank, appeared or vanished.
#[derive(Parser, Debug)]
#[command(name = "webpack-diff", author, version, about, long_about = None)]
pub struct Cli {
    /// Baseline stats JSON
    #[arg(value_name = "BASELINE")]
    pub baseline: Option<PathBuf>,

    /// Current stats JSON
    #[arg(value_name = "CURRENT")]
    pub current: Option<PathBuf>,

    /// Hide module rows and decreased assets whose absolute delta is below this many bytes
    #[arg(short, long, value_name = "BYTES")]
    pub cutoff: Option<u64>,

    /// Output as JSON (for CI/CD integration)
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write the current snapshot's asset dependency graph to FILE
    #[arg(long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Read settings from FILE instead of ./.webpack-diff.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum, exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Arguments for the compare command
    pub fn compare_args(&self) -> CompareArgs {
        CompareArgs {
            baseline: self.baseline.clone(),
            current: self.current.clone(),
            cutoff: self.cutoff,
            json: self.json,
            no_color: self.no_color,
            graph: self.graph.clone(),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn test_parses_paths_and_short_cutoff() {
        let cli = Cli::try_parse_from(["webpack-diff", "old.json", "new.json", "-c", "100"]).unwrap();
        let args = cli.compare_args();
        assert_eq!(args.baseline, Some(PathBuf::from("old.json")));
        assert_eq!(args.current, Some(PathBuf::from("new.json")));
        assert_eq!(args.cutoff, Some(100));
    }

    #[test]
    fn test_paths_are_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["webpack-diff", "old.json"]).unwrap();
        assert!(cli.current.is_none());
        assert!(cli.cutoff.is_none());
    }

    #[test]
    fn test_negative_cutoff_is_rejected() {
        assert!(Cli::try_parse_from(["webpack-diff", "a", "b", "--cutoff", "-1"]).is_err());
    }

    #[test]
    fn test_completions_flag_is_exclusive() {
        assert!(Cli::try_parse_from(["webpack-diff", "--completions", "bash"]).is_ok());
        assert!(Cli::try_parse_from(["webpack-diff", "a", "--completions", "bash"]).is_err());
    }
}
