//! Stats document loading and validation

use super::types::StatsDocument;
use crate::error::DiffError;
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Reads webpack stats documents from disk
pub struct StatsLoader;

impl StatsLoader {
    /// Check that a stats path exists, before any document is read
    ///
    /// `role` names the input in the error ("baseline" or "current").
    pub fn ensure_exists<FS: FileSystem>(path: &Path, role: &str, fs: &FS) -> Result<(), DiffError> {
        if fs.exists(path) {
            Ok(())
        } else {
            Err(DiffError::PathNotFound {
                path: path.to_path_buf(),
                role: role.to_string(),
            })
        }
    }

    /// Load and parse a stats document
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use webpack_diff::stats::StatsLoader;
    /// use std::path::Path;
    ///
    /// let doc = StatsLoader::load(Path::new("stats.json"))?;
    /// println!("{} assets", doc.assets.len());
    /// # Ok::<(), webpack_diff::error::DiffError>(())
    /// ```
    pub fn load(path: &Path) -> Result<StatsDocument, DiffError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<StatsDocument, DiffError> {
        let contents = fs.read_to_string(path).map_err(|source| DiffError::Io {
            context: format!("reading {}", path.display()),
            source,
        })?;

        let doc = Self::parse(path, &contents)?;
        log::debug!(
            "loaded {}: {} assets, {} chunks",
            path.display(),
            doc.assets.len(),
            doc.chunks.len()
        );
        Ok(doc)
    }

    /// Parse stats JSON, attributing failures to `path`
    pub fn parse(path: &Path, contents: &str) -> Result<StatsDocument, DiffError> {
        serde_json::from_str(contents).map_err(|source| DiffError::MalformedInput {
            path: path.to_path_buf(),
            source,
        })
    }
}
