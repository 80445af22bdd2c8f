//! Writing mode files and database backups.
//!
//! Mode files are pretty-printed with two-space indentation, keep non-ASCII
//! text as-is, and are written atomically (temp file, then rename) so a crash
//! never leaves a half-written file behind.

use crate::store::error::{ModeStoreError, Result};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Serializes `value` as pretty JSON and writes it to `path`.
///
/// The output uses two-space indentation, ends with a newline and leaves
/// non-ASCII characters unescaped.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
///
/// # Examples
///
/// ```no_run
/// use modequill::document::template::template_mode;
/// use modequill::file::saver::save_json_file;
///
/// save_json_file("mode_template.json", &template_mode()).unwrap();
/// ```
pub fn save_json_file<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    write_file_atomic(path.as_ref(), json.as_bytes())
}

/// Writes data to a file atomically.
///
/// The data goes to a sibling temp file first, which is then renamed over the
/// target path.
fn write_file_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);
    let io_err = |source| ModeStoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&temp_path, data).map_err(io_err)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_err(e));
    }

    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Copies a file next to itself with a `.bak` suffix.
///
/// Returns the path of the backup.
pub fn create_backup<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let original_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ModeStoreError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file name"),
        })?;
    let backup_path = path.with_file_name(format!("{}.bak", original_name));

    fs::copy(path, &backup_path).map_err(|source| ModeStoreError::Io {
        path: backup_path.clone(),
        source,
    })?;
    debug!("Backed up {} to {}", path.display(), backup_path.display());
    Ok(backup_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_pretty_two_space_unescaped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mode.json");
        save_json_file(&path, &json!({ "name": "Режим", "tools": [1] })).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "{\n  \"name\": \"Режим\",\n  \"tools\": [\n    1\n  ]\n}\n"
        );
        assert!(!dir.path().join("mode.json.tmp").exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mode.json");
        fs::write(&path, "old").unwrap();
        save_json_file(&path, &json!({})).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("mode.json");
        assert!(matches!(
            save_json_file(&path, &json!({})),
            Err(ModeStoreError::Io { .. })
        ));
    }

    #[test]
    fn test_create_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.vscdb");
        fs::write(&path, b"data").unwrap();

        let backup = create_backup(&path).unwrap();
        assert_eq!(backup, dir.path().join("state.vscdb.bak"));
        assert_eq!(fs::read(&backup).unwrap(), b"data");
    }
}
