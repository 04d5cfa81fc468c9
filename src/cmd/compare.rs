//! Compare command implementation
//!
//! Validates both stats paths, loads them, reconciles their assets and
//! prints the delta report.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, ConfigLoader};
use crate::error::DiffError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::reconcile::Reconciler;
use crate::report::{Report, ReportOptions, TextReporter};
use crate::stats::{write_dependency_graph, StatsLoader};

/// Arguments of a comparison run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareArgs {
    /// Baseline stats path
    pub baseline: Option<PathBuf>,
    /// Current stats path
    pub current: Option<PathBuf>,
    /// Cutoff override; falls back to the config file, then 0
    pub cutoff: Option<u64>,
    /// Print JSON instead of text
    pub json: bool,
    /// Disable ANSI styling
    pub no_color: bool,
    /// Where to write the current snapshot's dependency graph
    pub graph: Option<PathBuf>,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
}

/// Compare two stats snapshots and print the report to stdout
///
/// # Examples
///
/// ```no_run
/// use webpack_diff::cmd::{cmd_compare, CompareArgs};
/// use std::path::PathBuf;
///
/// cmd_compare(&CompareArgs {
///     baseline: Some(PathBuf::from("baseline.stats.json")),
///     current: Some(PathBuf::from("current.stats.json")),
///     cutoff: Some(100),
///     ..CompareArgs::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Either path is missing or does not exist
/// - Either document is not webpack stats JSON
/// - The configuration file is invalid
pub fn cmd_compare(args: &CompareArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    compare_with(args, &RealFileSystem, Path::new("."), &mut out)
}

/// Run a comparison against a custom filesystem and output sink
///
/// `project_root` is searched for `.webpack-diff.toml` when no explicit
/// config file is given.
pub fn compare_with<FS: FileSystem, W: Write>(
    args: &CompareArgs,
    fs: &FS,
    project_root: &Path,
    out: &mut W,
) -> Result<()> {
    let baseline_path = args
        .baseline
        .as_deref()
        .ok_or_else(|| DiffError::MissingArgument {
            argument: "baseline".to_string(),
        })?;
    let current_path = args
        .current
        .as_deref()
        .ok_or_else(|| DiffError::MissingArgument {
            argument: "current".to_string(),
        })?;

    StatsLoader::ensure_exists(baseline_path, "baseline", fs)?;
    StatsLoader::ensure_exists(current_path, "current", fs)?;

    let config = match &args.config {
        Some(path) => ConfigLoader::load_file(path, fs)?,
        None => ConfigLoader::load_with_fs(project_root, fs)?,
    };
    let options = report_options(args, &config);
    log::debug!("report options: {:?}", options);

    let baseline = StatsLoader::load_with_fs(baseline_path, fs)?;
    let current = StatsLoader::load_with_fs(current_path, fs)?;

    let reconciliation = Reconciler::new().reconcile(&baseline, &current);
    let report = Report::build(&reconciliation, options.cutoff);

    if let Some(graph_path) = &args.graph {
        write_dependency_graph(&current, graph_path, fs)?;
    }

    if args.json {
        writeln!(out, "{}", report.to_json()?).context("Failed to write report")?;
    } else {
        TextReporter::new(options)
            .render(&report, out)
            .context("Failed to write report")?;
    }

    Ok(())
}

/// Merge command-line flags over configuration file values
fn report_options(args: &CompareArgs, config: &ConfigFile) -> ReportOptions {
    ReportOptions {
        cutoff: args.cutoff.unwrap_or(config.cutoff),
        name_width: config.name_width,
        color: config.color && !args.no_color && !args.json && console::colors_enabled(),
    }
}
