//! Configuration system for modequill.
//!
//! This module provides the configuration structure for modequill with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments (a `--db` flag always beats `db_path`).
//!
//! # Example
//!
//! ```
//! use modequill::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.template_file, "mode_template.json");
//! assert!(config.db_path.is_none());
//!
//! let custom = Config {
//!     create_backup: true,
//!     ..Config::default()
//! };
//! assert!(custom.create_backup);
//! ```

use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the modequill application.
///
/// # Fields
///
/// * `db_path` - State database to use when `--db` is not given (default: auto-detect)
/// * `create_backup` - Copy the database to `.bak` before every write (default: false)
/// * `template_file` - Where `template` writes when no file is named (default: "mode_template.json")
/// * `export_file` - Default export file offered by the interactive menu (default: "mode.json")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// State database to use when `--db` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Copy the database to `.bak` before writing
    #[serde(default)]
    pub create_backup: bool,

    /// Default template destination
    #[serde(default = "default_template_file")]
    pub template_file: String,

    /// Default export destination in the interactive menu
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_template_file() -> String {
    "mode_template.json".to_string()
}

fn default_export_file() -> String {
    "mode.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            create_backup: false,
            template_file: default_template_file(),
            export_file: default_export_file(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/modequill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("modequill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                warn!("Could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
