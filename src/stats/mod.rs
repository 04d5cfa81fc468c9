//! Webpack stats input
//!
//! Provides:
//! - Typed model of the stats JSON subset used for comparison
//! - Loading with path and shape validation
//! - Per-asset dependency graph export

pub mod graph;
pub mod loader;
pub mod types;

pub use graph::{dependency_graph, write_dependency_graph, AssetDependencies};
pub use loader::StatsLoader;
pub use types::{Asset, Chunk, ChunkFiles, ModuleRecord, StatsDocument, StatsId};
