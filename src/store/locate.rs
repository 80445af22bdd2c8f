//! Finding the editor's state database.
//!
//! Discovery is behind the [`StorageLocator`] trait so the binary can use the
//! platform layout while tests pin a fixed path.

use crate::config::Config;
use crate::store::error::{ModeStoreError, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// File name of the editor's state database.
pub const STATE_DB_FILE: &str = "state.vscdb";

/// Something that can suggest where the state database lives.
pub trait StorageLocator {
    /// Returns a candidate path, or `None` if nothing was found.
    fn locate(&self) -> Option<PathBuf>;
}

/// Looks in the editor's global storage under the per-user configuration
/// directory, then in the current directory.
///
/// The configuration directory is `%APPDATA%` on Windows,
/// `~/Library/Application Support` on macOS and `~/.config` on Linux.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformLocator;

impl PlatformLocator {
    /// Returns where the editor keeps its state database on this platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("Cursor");
            path.push("User");
            path.push("globalStorage");
            path.push(STATE_DB_FILE);
            path
        })
    }
}

impl StorageLocator for PlatformLocator {
    fn locate(&self) -> Option<PathBuf> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Some(path);
            }
            debug!("No state database at {}", path.display());
        }

        let local = PathBuf::from(STATE_DB_FILE);
        local.exists().then_some(local)
    }
}

/// Always answers with the same path.
#[derive(Debug, Clone)]
pub struct FixedLocator(pub PathBuf);

impl StorageLocator for FixedLocator {
    fn locate(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Picks the database path: an explicit path first, then `db_path` from the
/// configuration, then whatever the locator finds.
///
/// # Errors
///
/// Returns [`ModeStoreError::StorageNotLocated`] if no candidate exists, or
/// [`ModeStoreError::StorageNotFound`] if the chosen path is not a file on
/// disk.
pub fn resolve_storage(
    explicit: Option<&Path>,
    config: &Config,
    locator: &dyn StorageLocator,
) -> Result<PathBuf> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.db_path.clone())
        .or_else(|| locator.locate())
        .ok_or(ModeStoreError::StorageNotLocated)?;

    if !path.is_file() {
        return Err(ModeStoreError::StorageNotFound { path });
    }

    debug!("Using state database {}", path.display());
    Ok(path)
}
