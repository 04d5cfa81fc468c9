//! Asset dependency graph export
//!
//! Flattens one snapshot into a per-asset listing of the chunks and modules
//! it was built from, for feeding into external visualization tools.

use super::types::{StatsDocument, StatsId};
use crate::error::DiffError;
use crate::infra::FileSystem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Dependencies of a single emitted asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDependencies {
    /// Position of the asset in the stats `assets` array
    pub serial: usize,
    /// Emitted filename
    pub name: String,
    /// Chunk ids the asset references
    pub chunks: Vec<StatsId>,
    /// Names of the modules those chunks contain, in chunk order
    pub modules: Vec<String>,
}

/// Build the dependency graph of a snapshot
///
/// Chunk ids that do not resolve to a chunk are kept in `chunks` but
/// contribute no modules.
pub fn dependency_graph(doc: &StatsDocument) -> Vec<AssetDependencies> {
    let chunks: HashMap<&StatsId, _> = doc.chunks.iter().map(|c| (&c.id, c)).collect();

    doc.assets
        .iter()
        .enumerate()
        .map(|(serial, asset)| {
            let modules = asset
                .chunks
                .iter()
                .filter_map(|id| chunks.get(id).copied())
                .flat_map(|chunk| chunk.modules.iter().map(|m| m.name.clone()))
                .collect();

            AssetDependencies {
                serial,
                name: asset.name.clone(),
                chunks: asset.chunks.clone(),
                modules,
            }
        })
        .collect()
}

/// Serialize a snapshot's dependency graph as JSON to `path`
pub fn write_dependency_graph<FS: FileSystem>(
    doc: &StatsDocument,
    path: &Path,
    fs: &FS,
) -> Result<(), DiffError> {
    let graph = dependency_graph(doc);
    let json = serde_json::to_string_pretty(&graph).map_err(|e| DiffError::Io {
        context: format!("serializing dependency graph for {}", path.display()),
        source: e.into(),
    })?;

    fs.write(path, json).map_err(|source| DiffError::Io {
        context: format!("writing {}", path.display()),
        source,
    })?;

    log::debug!("wrote dependency graph for {} assets to {}", graph.len(), path.display());
    Ok(())
}
