//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::DiffError;
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .webpack-diff.toml in the given directory
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use webpack_diff::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("cutoff: {}", config.cutoff);
    /// # Ok::<(), webpack_diff::error::DiffError>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile, DiffError> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile, DiffError> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        match fs.read_to_string(&config_path) {
            Ok(contents) => Self::parse(&config_path, &contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            Err(source) => Err(DiffError::Io {
                context: format!("reading {}", config_path.display()),
                source,
            }),
        }
    }

    /// Load an explicitly named config file, which must exist
    pub fn load_file<FS: FileSystem>(path: &Path, fs: &FS) -> Result<ConfigFile, DiffError> {
        let contents = fs.read_to_string(path).map_err(|source| DiffError::Io {
            context: format!("reading {}", path.display()),
            source,
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<ConfigFile, DiffError> {
        let config: ConfigFile =
            toml_edit::de::from_str(contents).map_err(|e| DiffError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if config.name_width == 0 {
            return Err(DiffError::InvalidConfig {
                path: path.to_path_buf(),
                message: "name-width must be at least 1".to_string(),
            });
        }

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}
