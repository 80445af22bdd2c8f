//! Reading mode files from disk.

use crate::store::error::{ModeStoreError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads and parses a JSON file.
///
/// A leading UTF-8 byte order mark is ignored, since editors on Windows
/// often write one.
///
/// # Errors
///
/// Returns [`ModeStoreError::Io`] if the file cannot be read and
/// [`ModeStoreError::Json`] if its contents are not valid JSON.
///
/// # Examples
///
/// ```no_run
/// use modequill::file::loader::load_json_file;
///
/// let value = load_json_file("mode.json").unwrap();
/// assert!(value.is_object());
/// ```
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ModeStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_with_bom() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\u{feff}{{\"name\": \"Ünï\"}}").unwrap();
        let value = load_json_file(file.path()).unwrap();
        assert_eq!(value["name"], "Ünï");
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{invalid json}}").unwrap();
        assert!(matches!(
            load_json_file(file.path()),
            Err(ModeStoreError::Json(_))
        ));
    }

    #[test]
    fn test_load_nonexistent_file() {
        assert!(matches!(
            load_json_file("/path/that/does/not/exist/mode.json"),
            Err(ModeStoreError::Io { .. })
        ));
    }
}
