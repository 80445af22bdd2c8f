//! Point access to the application state row in `state.vscdb`.
//!
//! The editor keeps its state in a SQLite key-value table. This module reads
//! and rewrites exactly one row of it and never inserts rows.

use crate::store::error::{ModeStoreError, Result};
use log::debug;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::Path;

/// Key-value table the editor persists its state in.
pub const STATE_TABLE: &str = "ItemTable";

/// Key of the row holding the composer state and its modes.
pub const MODES_KEY: &str =
    "src.vs.platform.reactivestorage.browser.reactiveStorageServiceImpl.persistentStorage.applicationUser";

/// Opens an existing database for reading and writing.
///
/// The file is never created; a missing file is reported as
/// [`ModeStoreError::StorageNotFound`].
pub fn open_connection(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(ModeStoreError::StorageNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Opening state database {}", path.display());
    let connection = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(connection)
}

/// Reads the raw value stored under `key`, or `None` if the key is absent.
///
/// Values stored as TEXT or as UTF-8 BLOBs are both accepted.
pub fn read_value(connection: &Connection, key: &str) -> Result<Option<String>> {
    let sql = format!("SELECT value FROM {} WHERE key = ?1", STATE_TABLE);
    let raw = connection
        .query_row(&sql, params![key], |row| {
            Ok(match row.get_ref(0)? {
                ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(bytes.to_vec()),
                _ => None,
            })
        })
        .optional()?;

    match raw {
        None => {
            debug!("Key {} not present", key);
            Ok(None)
        }
        Some(None) => Err(ModeStoreError::MalformedDocument(
            "stored value is neither text nor a blob".to_string(),
        )),
        Some(Some(bytes)) => {
            debug!("Read {} bytes for key {}", bytes.len(), key);
            String::from_utf8(bytes).map(Some).map_err(|_| {
                ModeStoreError::MalformedDocument("stored value is not valid UTF-8".to_string())
            })
        }
    }
}

/// Overwrites the value stored under `key` with a single UPDATE.
///
/// # Errors
///
/// Returns [`ModeStoreError::KeyNotFound`] if no row was updated.
pub fn write_value(connection: &Connection, key: &str, value: &str) -> Result<()> {
    let sql = format!("UPDATE {} SET value = ?1 WHERE key = ?2", STATE_TABLE);
    let updated = connection.execute(&sql, params![value, key])?;
    if updated == 0 {
        return Err(ModeStoreError::KeyNotFound);
    }
    debug!("Wrote {} bytes for key {}", value.len(), key);
    Ok(())
}
