//! Webpack stats document types
//!
//! Only the subset of the webpack stats schema the comparison needs is modeled.
//! Unknown fields are ignored so full `webpack --json` output parses as-is.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chunk or module identifier
///
/// Webpack emits numeric ids by default and string ids with named id plugins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatsId {
    /// Numeric id (`"id": 3`)
    Number(u64),
    /// Named id (`"id": "vendors~main"`)
    Name(String),
}

impl fmt::Display for StatsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<u64> for StatsId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for StatsId {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

/// One build-stats snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDocument {
    /// Emitted output files
    pub assets: Vec<Asset>,
    /// Chunks with their modules
    pub chunks: Vec<Chunk>,
    /// Logical chunk name to emitted filename(s), in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_by_chunk_name: Option<IndexMap<String, ChunkFiles>>,
}

/// Emitted output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Emitted filename, usually content-hashed
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Chunks this asset was built from
    #[serde(default)]
    pub chunks: Vec<StatsId>,
}

/// Build-internal module grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk id, scoped to its own snapshot
    pub id: StatsId,
    /// Modules bundled into the chunk
    #[serde(default)]
    pub modules: Vec<ModuleRecord>,
}

/// Module entry nested inside a chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Module id, `null` for modules webpack did not assign one
    #[serde(default)]
    pub id: Option<StatsId>,
    /// Readable path-like name, e.g. `./src/index.js + 4 modules`
    pub name: String,
    /// Distance from the entry point, `null` for modules no entry reaches
    #[serde(default)]
    pub depth: Option<u32>,
    /// Size in bytes
    pub size: u64,
    /// Loader-qualified identifier; concatenated modules list every member
    /// separated by spaces
    #[serde(default)]
    pub identifier: String,
}

/// Value of an `assetsByChunkName` entry
///
/// Webpack 4+ emits an array when a chunk produced several files
/// (e.g. a bundle and its source map).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkFiles {
    /// Single emitted file
    Single(String),
    /// Several emitted files, primary file first
    Many(Vec<String>),
}

impl ChunkFiles {
    /// The chunk's primary emitted file
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Single(name) => Some(name),
            Self::Many(names) => names.first().map(String::as_str),
        }
    }
}
