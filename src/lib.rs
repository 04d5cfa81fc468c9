#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! webpack-diff library
//!
//! Compares two webpack stats snapshots and reports which assets and modules
//! grew, shrank, appeared or disappeared. It can be used programmatically in
//! addition to the CLI interface.
//!
//! # Basic Example
//!
//! ```
//! use webpack_diff::reconcile::Reconciler;
//! use webpack_diff::report::{Report, ReportOptions, TextReporter};
//! use webpack_diff::stats::StatsDocument;
//!
//! let baseline: StatsDocument = serde_json::from_str(r#"{
//!     "assets": [{"name": "app.js", "size": 100, "chunks": [0]}],
//!     "chunks": [{"id": 0, "modules": [
//!         {"name": "src/a.js", "depth": 0, "size": 100, "id": 1, "identifier": "a"}
//!     ]}]
//! }"#)?;
//! let current: StatsDocument = serde_json::from_str(r#"{
//!     "assets": [{"name": "app.js", "size": 150, "chunks": [0]}],
//!     "chunks": [{"id": 0, "modules": [
//!         {"name": "src/a.js", "depth": 0, "size": 120, "id": 1, "identifier": "a"}
//!     ]}]
//! }"#)?;
//!
//! let reconciliation = Reconciler::new().reconcile(&baseline, &current);
//! let report = Report::build(&reconciliation, 0);
//! assert_eq!(report.increased[0].asset.delta, 50);
//!
//! let text = TextReporter::new(ReportOptions::default()).render_to_string(&report)?;
//! assert!(text.contains("app.js: 50"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Advanced Example: Stricter Module Matching
//!
//! The default module key merges modules sharing a basename and depth.
//! Any [`reconcile::ModuleKey`] can replace it:
//!
//! ```
//! use webpack_diff::reconcile::{FullNameDepth, Reconciler};
//! use webpack_diff::stats::StatsDocument;
//!
//! let doc: StatsDocument = serde_json::from_str(r#"{
//!     "assets": [{"name": "app.js", "size": 10, "chunks": [0]}],
//!     "chunks": [{"id": 0, "modules": [
//!         {"name": "a/foo.js", "depth": 1, "size": 4},
//!         {"name": "b/foo.js", "depth": 1, "size": 6}
//!     ]}]
//! }"#)?;
//!
//! let lossy = Reconciler::new().reconcile(&doc, &doc);
//! assert_eq!(lossy.registry().len(), 1);
//!
//! let strict = Reconciler::with_key(FullNameDepth).reconcile(&doc, &doc);
//! assert_eq!(strict.registry().len(), 2);
//! # Ok::<(), serde_json::Error>(())
//! ```

/// Asset change classification
pub mod classify;
/// Command-line interface definition
pub mod cli;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Asset and module reconciliation
pub mod reconcile;
/// Report building and rendering
pub mod report;
/// Webpack stats input
pub mod stats;
