//! Typed representation of a single mode entry.
//!
//! A mode is one behavior profile in Cursor's composer: its name and icon,
//! how much the model thinks, whether tool calls run automatically, and which
//! tools and MCP servers it may use. Modes live in the `modes4` list of the
//! application state document.
//!
//! # Example
//!
//! ```
//! use modequill::document::mode::{is_builtin, ThinkingLevel};
//!
//! assert!(is_builtin("agent"));
//! assert!(!is_builtin("code1c"));
//! assert_eq!(ThinkingLevel::default(), ThinkingLevel::None);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Ids of the modes that ship with the editor. These are never deleted.
pub const BUILTIN_MODE_IDS: [&str; 6] = ["agent", "plan", "background", "chat", "spec", "debug"];

/// Returns true if `id` names one of the editor's built-in modes.
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_MODE_IDS.contains(&id)
}

/// How much reasoning the model performs before answering.
///
/// Levels written by newer editor versions are kept verbatim in `Other` so
/// reading a stored mode never fails on them. Imported modes are restricted
/// to the four known levels by [`crate::document::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThinkingLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Other(String),
}

impl ThinkingLevel {
    /// All accepted values, in ascending order.
    pub const ALL: [ThinkingLevel; 4] = [
        ThinkingLevel::None,
        ThinkingLevel::Low,
        ThinkingLevel::Medium,
        ThinkingLevel::High,
    ];

    /// Returns the wire name of the level.
    pub fn as_str(&self) -> &str {
        match self {
            ThinkingLevel::None => "none",
            ThinkingLevel::Low => "low",
            ThinkingLevel::Medium => "medium",
            ThinkingLevel::High => "high",
            ThinkingLevel::Other(level) => level,
        }
    }

    /// Parses one of the known wire names, returning `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }
}

impl From<String> for ThinkingLevel {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or(ThinkingLevel::Other(s))
    }
}

impl From<ThinkingLevel> for String {
    fn from(level: ThinkingLevel) -> Self {
        match level {
            ThinkingLevel::Other(level) => level,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ThinkingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mode entry as stored in the `modes4` list.
///
/// Fields the editor adds that this crate does not know about are kept in
/// `extra` and written back unchanged. Stored entries are read leniently
/// (absent fields take their defaults) so that built-in modes written by the
/// editor always load; imported entries are checked strictly by
/// [`crate::document::validate`] before they reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub thinking_level: ThinkingLevel,

    #[serde(default)]
    pub auto_run: bool,

    #[serde(default)]
    pub should_auto_apply_if_no_edit_tool: bool,

    /// Numeric tool identifiers, in the order the editor shows them.
    #[serde(default)]
    pub enabled_tools: Vec<i64>,

    #[serde(default)]
    pub auto_fix: bool,

    #[serde(default)]
    pub enabled_mcp_servers: Vec<Value>,

    #[serde(
        rename = "customRulesForAI",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_rules_for_ai: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Mode {
    /// Returns true if this mode is one of the editor's built-in modes.
    pub fn is_builtin(&self) -> bool {
        is_builtin(&self.id)
    }

    /// Display name, falling back to a placeholder for unnamed modes.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Untitled"
        } else {
            &self.name
        }
    }
}
