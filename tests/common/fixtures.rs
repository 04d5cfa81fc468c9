//! Test fixture helpers for creating stats documents
//!
//! Provides realistic webpack stats snapshots covering every report section.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Baseline snapshot
///
/// - `main` (hashed `main.aaa.js`) grows in the current build
/// - `vendor` is unchanged
/// - `legacy` is removed
/// - `styles.css` and `polyfills.js` have no chunk name; they shrink by 2 and
///   400 bytes
pub const BASELINE_STATS: &str = r#"{
  "assets": [
    {"name": "main.aaa.js", "size": 1000, "chunks": [0]},
    {"name": "vendor.js", "size": 5000, "chunks": [1]},
    {"name": "legacy.js", "size": 300, "chunks": [2]},
    {"name": "styles.css", "size": 202, "chunks": []},
    {"name": "polyfills.js", "size": 900, "chunks": []}
  ],
  "chunks": [
    {"id": 0, "modules": [
      {"id": 10, "name": "./src/index.js + 2 modules", "depth": 0, "size": 600,
       "identifier": "/app/node_modules/babel-loader/lib/index.js!/app/src/index.js /app/node_modules/babel-loader/lib/index.js!/app/src/app.js /app/src/util.js"},
      {"id": 11, "name": "./src/big.js", "depth": 1, "size": 300, "identifier": "/app/src/big.js"},
      {"id": 12, "name": "./src/tiny.js", "depth": 1, "size": 100, "identifier": "/app/src/tiny.js"}
    ]},
    {"id": 1, "modules": [
      {"id": 20, "name": "./node_modules/react/index.js", "depth": 2, "size": 5000, "identifier": "/app/node_modules/react/index.js"}
    ]},
    {"id": 2, "modules": [
      {"id": 30, "name": "./src/legacy.js", "depth": 1, "size": 300, "identifier": "/app/src/legacy.js"}
    ]}
  ],
  "assetsByChunkName": {"main": "main.aaa.js", "vendor": "vendor.js", "legacy": "legacy.js"}
}"#;

/// Current snapshot, with different chunk ids than the baseline
///
/// `main.bbb.js` grows by 150: the concatenated module +100, `big.js` +50,
/// `tiny.js` +5, plus the new `fresh` async chunk.
pub const CURRENT_STATS: &str = r#"{
  "assets": [
    {"name": "main.bbb.js", "size": 1150, "chunks": ["main"]},
    {"name": "vendor.js", "size": 5000, "chunks": ["vendor"]},
    {"name": "fresh.js", "size": 250, "chunks": ["fresh"]},
    {"name": "styles.css", "size": 200, "chunks": []},
    {"name": "polyfills.js", "size": 500, "chunks": []}
  ],
  "chunks": [
    {"id": "main", "modules": [
      {"id": "idx", "name": "./src/index.js + 2 modules", "depth": 0, "size": 700,
       "identifier": "/app/node_modules/babel-loader/lib/index.js!/app/src/index.js /app/node_modules/babel-loader/lib/index.js!/app/src/app.js /app/src/util.js"},
      {"id": "big", "name": "./src/big.js", "depth": 1, "size": 350, "identifier": "/app/src/big.js"},
      {"id": "tiny", "name": "./src/tiny.js", "depth": 1, "size": 105, "identifier": "/app/src/tiny.js"}
    ]},
    {"id": "vendor", "modules": [
      {"id": "react", "name": "./node_modules/react/index.js", "depth": 2, "size": 5000, "identifier": "/app/node_modules/react/index.js"}
    ]},
    {"id": "fresh", "modules": [
      {"id": "fresh", "name": "./src/fresh.js", "depth": 1, "size": 250, "identifier": "/app/src/fresh.js"}
    ]}
  ],
  "assetsByChunkName": {"main": ["main.bbb.js", "main.bbb.js.map"], "vendor": "vendor.js", "fresh": "fresh.js"}
}"#;

/// Write a stats document into `dir`
pub fn write_stats(dir: &Path, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write a baseline/current pair into a fresh temporary directory
///
/// # Returns
///
/// A tuple of (TempDir, baseline path, current path) - the TempDir must be kept alive
pub fn write_pair(baseline: &str, current: &str) -> anyhow::Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let baseline_path = write_stats(temp_dir.path(), "baseline.json", baseline)?;
    let current_path = write_stats(temp_dir.path(), "current.json", current)?;
    Ok((temp_dir, baseline_path, current_path))
}
