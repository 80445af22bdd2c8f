//! ModeQuill - manage the custom modes stored in Cursor's state database.
//!
//! Cursor keeps its composer modes inside one JSON document stored in a
//! SQLite key-value table (`state.vscdb`). This crate reads that document,
//! lists, exports, imports and deletes modes, and writes the document back
//! without disturbing any of the editor's other state.
//!
//! - [`store`]: [`store::ModeStore`], storage discovery and errors
//! - [`document`]: typed modes and the state document
//! - [`file`]: mode JSON files
//! - [`config`]: user configuration
//! - [`ui`]: console output and the interactive menu

pub mod config;
pub mod document;
pub mod file;
pub mod store;
pub mod ui;
