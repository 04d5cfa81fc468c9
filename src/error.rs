//! Error types with contextual suggestions
//!
//! Every failure is terminal for a comparison run. Errors carry:
//! - An actionable message
//! - A suggested fix where one exists
//! - An exit code for CI pipelines
//!
//! # Examples
//!
//! ```
//! use webpack_diff::error::DiffError;
//! use std::path::PathBuf;
//!
//! let err = DiffError::PathNotFound {
//!     path: PathBuf::from("baseline.json"),
//!     role: "baseline".to_string(),
//! };
//! assert_eq!(err.exit_code(), 1);
//! assert!(err.to_string().contains("baseline.json"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Usage line shown when a required path is missing
pub const USAGE: &str = "webpack-diff <baseline> <current> [--cutoff <bytes>]";

/// Errors raised while loading and comparing stats snapshots
#[derive(Error, Debug)]
pub enum DiffError {
    /// A required path argument was not given
    #[error("Missing required parameter: {argument}")]
    MissingArgument {
        /// Name of the missing argument
        argument: String,
    },

    /// A given path does not exist
    #[error("{} does not exist", .path.display())]
    PathNotFound {
        /// Offending path
        path: PathBuf,
        /// Which input the path was given for ("baseline" or "current")
        role: String,
    },

    /// A stats document is not valid JSON of the expected shape
    #[error("Malformed stats document {}", .path.display())]
    MalformedInput {
        /// Path of the document
        path: PathBuf,
        #[source]
        /// Parse error with line and column
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {}: {message}", .path.display())]
    InvalidConfig {
        /// Path of the configuration file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl DiffError {
    /// Get an actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use webpack_diff::error::DiffError;
    ///
    /// let err = DiffError::MissingArgument { argument: "current".to_string() };
    /// assert!(err.suggestion().unwrap().contains("webpack-diff <baseline> <current>"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MissingArgument { .. } => Some(format!("Usage: {}", USAGE)),
            Self::PathNotFound { path, role } => Some(format!(
                "Check the {} stats path; generate one with 'webpack --json > {}'",
                role,
                path.display()
            )),
            Self::MalformedInput { .. } => Some(
                "Stats files must be webpack JSON output containing 'assets' and 'chunks' \
                 (run webpack with '--json' and chunk modules enabled)"
                    .to_string(),
            ),
            Self::InvalidConfig { .. } => Some(
                "Supported keys: cutoff (integer), name-width (integer), color (boolean)"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get the process exit code for this error.
    ///
    /// Argument and path errors exit with 1; the rest follow sysexits.h.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument { .. } => 1,
            Self::PathNotFound { .. } => 1,
            Self::MalformedInput { .. } => 65, // EX_DATAERR
            Self::InvalidConfig { .. } => 78,  // EX_CONFIG
            Self::Io { .. } => 74,             // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(diff_error) = error.downcast_ref::<DiffError>() {
            if let Some(suggestion) = diff_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(diff_error) = error.downcast_ref::<DiffError>() {
            diff_error.exit_code()
        } else {
            1
        }
    }
}
