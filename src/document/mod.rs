//! Mode and application state document types.
//!
//! - [`mode`]: the typed [`mode::Mode`] entry and the built-in id set
//! - [`model`]: the [`model::Document`] wrapping the stored JSON object
//! - [`validate`]: required-field checks for imported modes
//! - [`template`]: the starter mode

pub mod mode;
pub mod model;
pub mod template;
pub mod validate;
