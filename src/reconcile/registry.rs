//! Shared module registry
//!
//! One registry spans both snapshots and every asset of a comparison run.
//! Assets hold [`ModuleHandle`]s into it, so a module listed under several
//! assets always shows the same sizes.

use crate::stats::{ModuleRecord, StatsId};
use serde::Serialize;
use std::collections::HashMap;

/// Which snapshot a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    /// Baseline ("old") stats
    Baseline,
    /// Current ("new") stats
    Current,
}

/// Index of a module inside a [`ModuleRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleHandle(usize);

/// A module merged across both snapshots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledModule {
    /// Derived identity key
    pub name: String,
    /// Module name as first seen
    pub full_name: String,
    /// Module identifier as first seen
    pub identifier: String,
    /// Baseline size, 0 when absent from the baseline
    pub old_size: u64,
    /// Current size, 0 when absent from the current build
    pub new_size: u64,
    /// Baseline module id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_id: Option<StatsId>,
    /// Current module id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_id: Option<StatsId>,
}

/// Suffix webpack gives scope-hoisted modules (`index.js + 4 modules`)
pub const CONCATENATED_SUFFIX: &str = " modules";

impl ReconciledModule {
    /// `new_size - old_size`
    pub fn delta(&self) -> i64 {
        self.new_size as i64 - self.old_size as i64
    }

    /// Key without its trailing `_<depth>` component
    pub fn display_name(&self) -> &str {
        match self.name.rfind('_') {
            Some(pos) => &self.name[..pos],
            None => &self.name,
        }
    }

    /// Whether webpack concatenated several source files into this module
    pub fn is_concatenated(&self) -> bool {
        self.display_name().ends_with(CONCATENATED_SUFFIX)
    }

    /// File names of a concatenated module's members
    ///
    /// Empty unless the module is concatenated and its identifier lists more
    /// than one entry. Each entry loses its loader chain (everything through
    /// the last `!`) and its directory.
    pub fn constituents(&self) -> Vec<&str> {
        if !self.is_concatenated() {
            return Vec::new();
        }

        let entries: Vec<&str> = self.identifier.split_whitespace().collect();
        if entries.len() < 2 {
            return Vec::new();
        }

        entries
            .into_iter()
            .map(|entry| {
                let resource = match entry.rfind('!') {
                    Some(pos) => &entry[pos + 1..],
                    None => entry,
                };
                match resource.rfind(['/', '\\']) {
                    Some(pos) => &resource[pos + 1..],
                    None => resource,
                }
            })
            .collect()
    }
}

/// Modules seen during one comparison run, keyed by derived name
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<ReconciledModule>,
    index: HashMap<String, ModuleHandle>,
}

impl ModuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one reference to `module` under `key`
    ///
    /// The first reference creates the entry with zero sizes. Every reference
    /// overwrites the size and id of the given snapshot, so the last one wins.
    /// Current references also replace the identifier, so concatenated
    /// modules list the members of the current build.
    pub fn record(&mut self, key: String, module: &ModuleRecord, snapshot: Snapshot) -> ModuleHandle {
        let handle = match self.index.get(&key) {
            Some(&handle) => handle,
            None => {
                let handle = ModuleHandle(self.modules.len());
                self.modules.push(ReconciledModule {
                    name: key.clone(),
                    full_name: module.name.clone(),
                    identifier: module.identifier.clone(),
                    old_size: 0,
                    new_size: 0,
                    old_id: None,
                    new_id: None,
                });
                self.index.insert(key, handle);
                handle
            }
        };

        let entry = &mut self.modules[handle.0];
        match snapshot {
            Snapshot::Baseline => {
                entry.old_size = module.size;
                entry.old_id = module.id.clone();
            }
            Snapshot::Current => {
                entry.new_size = module.size;
                entry.new_id = module.id.clone();
                entry.identifier = module.identifier.clone();
            }
        }

        handle
    }

    /// Resolve a handle issued by this registry
    pub fn get(&self, handle: ModuleHandle) -> &ReconciledModule {
        &self.modules[handle.0]
    }

    /// Look a module up by derived key
    pub fn find(&self, key: &str) -> Option<&ReconciledModule> {
        self.index.get(key).map(|&h| self.get(h))
    }

    /// Number of distinct modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no module has been recorded
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
