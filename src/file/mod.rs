//! File I/O for mode JSON files.
//!
//! This module provides functionality to load mode files from disk and to
//! save modes back as pretty-printed JSON with atomic writes, plus backups of
//! the state database before it is rewritten.

pub mod loader;
pub mod saver;
