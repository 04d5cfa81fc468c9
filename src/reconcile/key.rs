//! Module identity strategies
//!
//! Module ids are assigned per build, so modules are matched across snapshots
//! by a key derived from the module record instead.

use crate::stats::ModuleRecord;

/// Derives the cross-build identity key of a module
///
/// Any `Fn(&ModuleRecord) -> String` closure is a key strategy too.
pub trait ModuleKey {
    /// Key under which the module is merged across snapshots
    fn key(&self, module: &ModuleRecord) -> String;
}

impl<F> ModuleKey for F
where
    F: Fn(&ModuleRecord) -> String,
{
    fn key(&self, module: &ModuleRecord) -> String {
        self(module)
    }
}

/// `basename(name) + "_" + depth`
///
/// Modules without a depth get `null` as their depth component.
///
/// Lossy: `a/foo.js` and `b/foo.js` at the same depth share one key and are
/// reported as a single module.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasenameDepth;

impl ModuleKey for BasenameDepth {
    fn key(&self, module: &ModuleRecord) -> String {
        format!("{}_{}", basename(&module.name), depth_label(module.depth))
    }
}

/// `name + "_" + depth`, keeping the full module path
#[derive(Debug, Clone, Copy, Default)]
pub struct FullNameDepth;

impl ModuleKey for FullNameDepth {
    fn key(&self, module: &ModuleRecord) -> String {
        format!("{}_{}", module.name, depth_label(module.depth))
    }
}

fn depth_label(depth: Option<u32>) -> String {
    depth.map_or_else(|| "null".to_string(), |d| d.to_string())
}

/// Text after the last `/`, or the whole name
pub fn basename(name: &str) -> &str {
    match name.rfind('/') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}
