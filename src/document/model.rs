//! The application state document that carries the mode list.
//!
//! The editor stores a large JSON object under a single key. Only
//! `composerState.modes4` matters here; everything else is held as an
//! order-preserving JSON object and written back untouched.

use crate::document::mode::Mode;
use crate::store::error::{ModeStoreError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Field holding the composer's state inside the document.
pub const COMPOSER_STATE_FIELD: &str = "composerState";

/// Field holding the mode list inside the composer state.
pub const MODES_FIELD: &str = "modes4";

/// A parsed application state document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Parses a document from the raw text stored in the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or is not a JSON object.
    pub fn parse(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ModeStoreError::MalformedDocument(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Serializes the whole document compactly for storage.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Returns the composer state object, if the document has one.
    pub fn composer_state(&self) -> Option<&Value> {
        self.root.get(COMPOSER_STATE_FIELD)
    }

    /// Replaces the composer state object, keeping its position among the
    /// document's top-level fields.
    pub fn set_composer_state(&mut self, state: Value) {
        self.root.insert(COMPOSER_STATE_FIELD.to_string(), state);
    }

    /// Returns the stored mode entries exactly as the editor wrote them.
    ///
    /// A document without a composer state, or a composer state without a
    /// mode list, has no entries. Entries are not interpreted, so mutations
    /// built on them leave every untouched mode byte-for-byte the same.
    ///
    /// # Errors
    ///
    /// Returns an error if the composer state is not an object or the mode
    /// list is not an array.
    pub fn mode_entries(&self) -> Result<Vec<Value>> {
        let state = match self.composer_state() {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Object(state)) => state,
            Some(other) => {
                return Err(ModeStoreError::MalformedDocument(format!(
                    "{} is {}, expected an object",
                    COMPOSER_STATE_FIELD,
                    kind_of(other)
                )))
            }
        };

        match state.get(MODES_FIELD) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(other) => Err(ModeStoreError::MalformedDocument(format!(
                "{} is {}, expected an array",
                MODES_FIELD,
                kind_of(other)
            ))),
        }
    }

    /// Returns the typed view of the mode list, for display and lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has the wrong shape or an entry is not a
    /// mode object.
    pub fn modes(&self) -> Result<Vec<Mode>> {
        self.mode_entries()?
            .iter()
            .map(|item| {
                if !item.is_object() {
                    return Err(ModeStoreError::MalformedDocument(format!(
                        "{} contains {}, expected an object",
                        MODES_FIELD,
                        kind_of(item)
                    )));
                }
                Ok(Mode::deserialize(item)?)
            })
            .collect()
    }

    /// Replaces the mode list, leaving every other field of the composer
    /// state and of the document as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the composer state exists but is not an object.
    pub fn set_mode_entries(&mut self, entries: Vec<Value>) -> Result<()> {
        let state = self
            .root
            .entry(COMPOSER_STATE_FIELD.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if state.is_null() {
            *state = Value::Object(Map::new());
        }

        match state {
            Value::Object(state) => {
                state.insert(MODES_FIELD.to_string(), Value::Array(entries));
                Ok(())
            }
            other => Err(ModeStoreError::MalformedDocument(format!(
                "{} is {}, expected an object",
                COMPOSER_STATE_FIELD,
                kind_of(other)
            ))),
        }
    }
}

/// Returns the `id` of a stored mode entry, if it has a string id.
pub fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
