//! Common test utilities and helpers
//!
//! Shared functionality for integration tests:
//! - Stats document fixtures
//! - Helpers for writing fixtures into temporary directories
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! let (dir, baseline, current) = fixtures::write_pair(
//!     fixtures::BASELINE_STATS,
//!     fixtures::CURRENT_STATS,
//! ).unwrap();
//! ```

pub mod fixtures;

