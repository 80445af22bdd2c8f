//! Read-modify-write access to the modes stored in the editor's database.
//!
//! [`ModeStore`] wraps one SQLite file. Every operation opens its own
//! connection, reads the application state row once and writes it back at
//! most once. Reads treat a missing row as an empty mode list; writes refuse
//! to run without it, since the row belongs to the editor and is never
//! created here.
//!
//! # Example
//!
//! ```no_run
//! use modequill::store::ModeStore;
//!
//! let store = ModeStore::open("state.vscdb").unwrap();
//! for mode in store.list(false).unwrap() {
//!     println!("{} ({})", mode.name, mode.id);
//! }
//! ```

pub mod error;
pub mod locate;
pub mod record;

use crate::config::Config;
use crate::document::mode::{is_builtin, Mode};
use crate::document::model::{entry_id, Document};
use crate::document::template::template_mode;
use crate::document::validate::{resolve_id, validate_mode};
use crate::file::loader::load_json_file;
use crate::file::saver::{create_backup, save_json_file};
use self::error::{ModeStoreError, Result};
use log::{debug, info, warn};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Whether an import added a new mode or overwrote one with the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Added,
    Replaced,
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportOutcome::Added => write!(f, "added"),
            ImportOutcome::Replaced => write!(f, "replaced"),
        }
    }
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct Imported {
    /// The mode as stored, with its resolved id.
    pub mode: Mode,
    pub outcome: ImportOutcome,
}

/// Accessor for the mode list inside one state database.
#[derive(Debug, Clone)]
pub struct ModeStore {
    path: PathBuf,
    create_backup: bool,
}

impl ModeStore {
    /// Opens a store over an existing database file.
    ///
    /// # Errors
    ///
    /// Returns [`ModeStoreError::StorageNotFound`] if the file does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModeStoreError::StorageNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            create_backup: false,
        })
    }

    /// Opens a store and applies the store-related configuration settings.
    pub fn with_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self> {
        Ok(Self::open(path)?.with_backup(config.create_backup))
    }

    /// Enables or disables copying the database to `.bak` before writes.
    pub fn with_backup(mut self, create_backup: bool) -> Self {
        self.create_backup = create_backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        record::open_connection(&self.path)
    }

    /// Reads and parses the application state, or `None` if its row is absent.
    pub fn load_document(&self) -> Result<Option<Document>> {
        let connection = self.connect()?;
        load_with(&connection)
    }

    /// Writes the mode list of `document` back to the database.
    ///
    /// The current row is re-read and only its composer state is replaced, so
    /// fields changed by the editor since `document` was loaded survive.
    ///
    /// # Errors
    ///
    /// Returns [`ModeStoreError::KeyNotFound`] if the row does not exist.
    pub fn save_document(&self, document: &Document) -> Result<()> {
        let connection = self.connect()?;
        self.save_with(&connection, document)
    }

    fn save_with(&self, connection: &Connection, document: &Document) -> Result<()> {
        let mut current = load_with(connection)?.ok_or(ModeStoreError::KeyNotFound)?;
        let state = document
            .composer_state()
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        current.set_composer_state(state);

        if self.create_backup {
            create_backup(&self.path)?;
        }

        record::write_value(connection, record::MODES_KEY, &current.to_json_string()?)
    }

    /// Loads the document for a mutation, which requires the row to exist.
    fn load_for_write(&self, connection: &Connection) -> Result<Document> {
        load_with(connection)?.ok_or(ModeStoreError::KeyNotFound)
    }

    fn read_modes(&self) -> Result<Vec<Mode>> {
        match self.load_document()? {
            Some(document) => document.modes(),
            None => Ok(Vec::new()),
        }
    }

    /// Returns the first stored entry with the given id, exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns [`ModeStoreError::NotFound`] if no entry matches.
    pub fn get_entry(&self, id: &str) -> Result<Value> {
        let entries = match self.load_document()? {
            Some(document) => document.mode_entries()?,
            None => Vec::new(),
        };
        entries
            .into_iter()
            .find(|entry| entry_id(entry) == Some(id))
            .ok_or_else(|| ModeStoreError::NotFound { id: id.to_string() })
    }

    /// Returns the stored modes in order, optionally without the built-ins.
    pub fn list(&self, include_builtin: bool) -> Result<Vec<Mode>> {
        let mut modes = self.read_modes()?;
        if !include_builtin {
            modes.retain(|mode| !mode.is_builtin());
        }
        Ok(modes)
    }

    /// Returns the first mode with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ModeStoreError::NotFound`] if no mode matches.
    pub fn get(&self, id: &str) -> Result<Mode> {
        self.read_modes()?
            .into_iter()
            .find(|mode| mode.id == id)
            .ok_or_else(|| ModeStoreError::NotFound { id: id.to_string() })
    }

    /// Writes the stored entry with the given id to `destination` as pretty
    /// JSON, field for field as the editor wrote it.
    ///
    /// Returns the typed view of the exported mode.
    pub fn export<P: AsRef<Path>>(&self, id: &str, destination: P) -> Result<Mode> {
        let entry = self.get_entry(id)?;
        let mode = Mode::deserialize(&entry)?;
        save_json_file(destination.as_ref(), &entry)?;
        info!(
            "Exported mode {} to {}",
            mode.id,
            destination.as_ref().display()
        );
        Ok(mode)
    }

    /// Imports a mode from a JSON file.
    ///
    /// See [`ModeStore::import_value`] for the id and overwrite rules.
    pub fn import<P: AsRef<Path>>(&self, source: P, override_id: Option<&str>) -> Result<Imported> {
        let value = load_json_file(source)?;
        self.import_value(value, override_id)
    }

    /// Adds a mode, or replaces the stored mode with the same id in place.
    ///
    /// `override_id` forces the id; otherwise a missing or empty id is
    /// replaced with a fresh UUID. The object is validated before the
    /// database is touched and stored as given. Other stored entries are
    /// written back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ModeStoreError::Validation`] for an incomplete object and
    /// [`ModeStoreError::KeyNotFound`] if the state row does not exist.
    pub fn import_value(&self, value: Value, override_id: Option<&str>) -> Result<Imported> {
        let value = match value {
            Value::Object(mut object) => {
                resolve_id(&mut object, override_id.filter(|id| !id.is_empty()));
                Value::Object(object)
            }
            other => other,
        };
        let mode = validate_mode(value.clone())?;

        let connection = self.connect()?;
        let mut document = self.load_for_write(&connection)?;
        let mut entries = document.mode_entries()?;

        let position = entries
            .iter()
            .position(|entry| entry_id(entry) == Some(mode.id.as_str()));
        let outcome = match position {
            Some(index) => {
                warn!("Mode with id '{}' already exists, replacing it", mode.id);
                entries[index] = value;
                ImportOutcome::Replaced
            }
            None => {
                entries.push(value);
                ImportOutcome::Added
            }
        };

        document.set_mode_entries(entries)?;
        self.save_with(&connection, &document)?;
        info!("Imported mode {} ({})", mode.id, outcome);

        Ok(Imported { mode, outcome })
    }

    /// Deletes every mode with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ModeStoreError::BuiltinProtected`] for built-in ids without
    /// looking at the database, and [`ModeStoreError::NotFound`] if nothing
    /// was removed.
    pub fn delete(&self, id: &str) -> Result<()> {
        if is_builtin(id) {
            return Err(ModeStoreError::BuiltinProtected { id: id.to_string() });
        }

        let connection = self.connect()?;
        let mut document = self.load_for_write(&connection)?;
        let mut entries = document.mode_entries()?;
        let before = entries.len();
        entries.retain(|entry| entry_id(entry) != Some(id));

        if entries.len() == before {
            return Err(ModeStoreError::NotFound { id: id.to_string() });
        }

        document.set_mode_entries(entries)?;
        self.save_with(&connection, &document)?;
        info!("Deleted mode {}", id);
        Ok(())
    }

    /// Writes the starter mode to `destination`. Needs no database.
    pub fn create_template<P: AsRef<Path>>(destination: P) -> Result<Mode> {
        let mode = template_mode();
        save_json_file(destination.as_ref(), &mode)?;
        info!("Wrote template to {}", destination.as_ref().display());
        Ok(mode)
    }
}

fn load_with(connection: &Connection) -> Result<Option<Document>> {
    match record::read_value(connection, record::MODES_KEY)? {
        Some(text) => {
            let document = Document::parse(&text)?;
            debug!(
                "Loaded application state with {} top-level fields",
                document.root().len()
            );
            Ok(Some(document))
        }
        None => Ok(None),
    }
}
