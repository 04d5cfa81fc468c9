//! Configuration file data structures

use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".webpack-diff.toml";

/// Width of the module column when not configured
pub const DEFAULT_NAME_WIDTH: usize = 29;

/// webpack-diff configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default absolute-delta cutoff in bytes
    #[serde(default)]
    pub cutoff: u64,

    /// Module column width in the module table
    #[serde(rename = "name-width", default = "default_name_width")]
    pub name_width: usize,

    /// Emit ANSI styling
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

fn default_color() -> bool {
    true
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            cutoff: 0,
            name_width: DEFAULT_NAME_WIDTH,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_cutoff() {
        let config = ConfigFile::default();
        assert_eq!(config.cutoff, 0);
        assert_eq!(config.name_width, 29);
        assert!(config.color);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ConfigFile = toml_edit::de::from_str("cutoff = 512\n").unwrap();
        assert_eq!(config.cutoff, 512);
        assert_eq!(config.name_width, DEFAULT_NAME_WIDTH);
        assert!(config.color);
    }

    #[test]
    fn test_kebab_case_keys() {
        let config: ConfigFile =
            toml_edit::de::from_str("name-width = 40\ncolor = false\n").unwrap();
        assert_eq!(config.name_width, 40);
        assert!(!config.color);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(toml_edit::de::from_str::<ConfigFile>("treshold = 1\n").is_err());
    }

    #[test]
    fn test_negative_cutoff_is_rejected() {
        assert!(toml_edit::de::from_str::<ConfigFile>("cutoff = -5\n").is_err());
    }
}
