//! Asset and module reconciliation
//!
//! Matches the assets of two stats snapshots by logical name and merges their
//! modules into one registry carrying both old and new sizes.
//!
//! Chunk ids and hashed filenames are build-specific, so:
//! - chunk lookups stay per snapshot
//! - asset names go through the `assetsByChunkName` alias table
//! - modules are matched by a [`ModuleKey`] strategy
//!
//! # Examples
//!
//! ```
//! use webpack_diff::reconcile::Reconciler;
//! use webpack_diff::stats::StatsDocument;
//!
//! let baseline: StatsDocument = serde_json::from_str(
//!     r#"{"assets": [{"name": "app.js", "size": 100, "chunks": []}], "chunks": []}"#,
//! )?;
//! let current: StatsDocument = serde_json::from_str(
//!     r#"{"assets": [{"name": "app.js", "size": 150, "chunks": []}], "chunks": []}"#,
//! )?;
//!
//! let result = Reconciler::new().reconcile(&baseline, &current);
//! let app = result.get("app.js").unwrap();
//! assert_eq!(app.old_size, Some(100));
//! assert_eq!(app.new_size, Some(150));
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod key;
pub mod registry;

pub use key::{BasenameDepth, FullNameDepth, ModuleKey};
pub use registry::{ModuleHandle, ModuleRegistry, ReconciledModule, Snapshot};

use crate::stats::{Asset, Chunk, StatsDocument, StatsId};
use std::collections::HashMap;

/// An asset matched across both snapshots
///
/// At least one of `old_size` and `new_size` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledAsset {
    /// Logical asset name
    pub name: String,
    /// Baseline size, `None` when the asset is new
    pub old_size: Option<u64>,
    /// Current size, `None` when the asset was removed
    pub new_size: Option<u64>,
    /// Modules touched while processing the asset, in chunk order
    pub modules: Vec<ModuleHandle>,
}

impl ReconciledAsset {
    /// `new_size - old_size` when both are present
    pub fn delta(&self) -> Option<i64> {
        match (self.old_size, self.new_size) {
            (Some(old), Some(new)) => Some(new as i64 - old as i64),
            _ => None,
        }
    }
}

/// Result of one comparison run
#[derive(Debug, Default)]
pub struct Reconciliation {
    assets: Vec<ReconciledAsset>,
    index: HashMap<String, usize>,
    registry: ModuleRegistry,
}

impl Reconciliation {
    /// Assets in baseline order, followed by current-only assets
    pub fn assets(&self) -> &[ReconciledAsset] {
        &self.assets
    }

    /// Look an asset up by logical name
    pub fn get(&self, name: &str) -> Option<&ReconciledAsset> {
        self.index.get(name).map(|&i| &self.assets[i])
    }

    /// Modules listed under `asset`
    pub fn modules<'a>(
        &'a self,
        asset: &'a ReconciledAsset,
    ) -> impl Iterator<Item = &'a ReconciledModule> + 'a {
        asset.modules.iter().map(|&h| self.registry.get(h))
    }

    /// The module registry shared by all assets
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }
}

/// Reconciles two stats snapshots
pub struct Reconciler<K: ModuleKey = BasenameDepth> {
    key: K,
}

impl Reconciler<BasenameDepth> {
    /// Create a reconciler using the basename + depth module key
    pub fn new() -> Self {
        Self { key: BasenameDepth }
    }
}

impl Default for Reconciler<BasenameDepth> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ModuleKey> Reconciler<K> {
    /// Create a reconciler with a custom module key strategy
    pub fn with_key(key: K) -> Self {
        Self { key }
    }

    /// Reconcile `baseline` against `current` with a fresh module registry
    pub fn reconcile(&self, baseline: &StatsDocument, current: &StatsDocument) -> Reconciliation {
        self.reconcile_with_registry(baseline, current, ModuleRegistry::new())
    }

    /// Reconcile using the given module registry
    ///
    /// The registry is moved into the result; modules already in it are
    /// merged with the ones found here.
    pub fn reconcile_with_registry(
        &self,
        baseline: &StatsDocument,
        current: &StatsDocument,
        registry: ModuleRegistry,
    ) -> Reconciliation {
        let old_chunks = chunk_table(&baseline.chunks);
        let new_chunks = chunk_table(&current.chunks);
        let aliases = alias_table(baseline, current);

        let mut result = Reconciliation {
            assets: Vec::with_capacity(baseline.assets.len()),
            index: HashMap::new(),
            registry,
        };

        for asset in &baseline.assets {
            let name = resolve_name(&aliases, &asset.name);
            let modules =
                self.collect_modules(&mut result.registry, &old_chunks, asset, Snapshot::Baseline);
            let reconciled = ReconciledAsset {
                name: name.to_string(),
                old_size: Some(asset.size),
                new_size: None,
                modules,
            };

            match result.index.get(name) {
                Some(&i) => {
                    log::debug!("baseline asset {} replaces earlier entry for {}", asset.name, name);
                    result.assets[i] = reconciled;
                }
                None => {
                    result.index.insert(name.to_string(), result.assets.len());
                    result.assets.push(reconciled);
                }
            }
        }

        for asset in &current.assets {
            let name = resolve_name(&aliases, &asset.name);
            let modules =
                self.collect_modules(&mut result.registry, &new_chunks, asset, Snapshot::Current);

            match result.index.get(name) {
                Some(&i) => {
                    let existing = &mut result.assets[i];
                    existing.new_size = Some(asset.size);
                    existing.modules = modules;
                }
                None => {
                    result.index.insert(name.to_string(), result.assets.len());
                    result.assets.push(ReconciledAsset {
                        name: name.to_string(),
                        old_size: None,
                        new_size: Some(asset.size),
                        modules,
                    });
                }
            }
        }

        log::debug!(
            "reconciled {} assets and {} modules",
            result.assets.len(),
            result.registry.len()
        );
        result
    }

    fn collect_modules(
        &self,
        registry: &mut ModuleRegistry,
        chunks: &HashMap<&StatsId, &Chunk>,
        asset: &Asset,
        snapshot: Snapshot,
    ) -> Vec<ModuleHandle> {
        let mut modules = Vec::new();
        for chunk_id in &asset.chunks {
            let Some(chunk) = chunks.get(chunk_id) else {
                log::warn!(
                    "asset {} references unknown chunk {} in {:?} stats",
                    asset.name,
                    chunk_id,
                    snapshot
                );
                continue;
            };
            for module in &chunk.modules {
                modules.push(registry.record(self.key.key(module), module, snapshot));
            }
        }
        modules
    }
}

fn chunk_table(chunks: &[Chunk]) -> HashMap<&StatsId, &Chunk> {
    chunks.iter().map(|chunk| (&chunk.id, chunk)).collect()
}

/// Emitted filename to logical chunk name; current overrides baseline
fn alias_table<'a>(baseline: &'a StatsDocument, current: &'a StatsDocument) -> HashMap<&'a str, &'a str> {
    let mut aliases = HashMap::new();
    for doc in [baseline, current] {
        let Some(by_chunk) = &doc.assets_by_chunk_name else {
            continue;
        };
        for (logical, files) in by_chunk {
            if let Some(file) = files.primary() {
                aliases.insert(file, logical.as_str());
            }
        }
    }
    aliases
}

fn resolve_name<'a>(aliases: &HashMap<&'a str, &'a str>, file: &'a str) -> &'a str {
    aliases.get(file).copied().unwrap_or(file)
}
