//! Starter mode written by `modequill template`.

use crate::document::mode::{Mode, ThinkingLevel};
use serde_json::Map;

/// Placeholder id left in the template for the user to replace.
pub const TEMPLATE_ID: &str = "YOUR_UNIQUE_ID";

/// Tool ids enabled in the template, in the editor's display order.
pub const TEMPLATE_TOOLS: [i64; 10] = [1, 18, 3, 6, 8, 5, 16, 7, 11, 15];

/// Icons the editor is known to accept.
pub const KNOWN_ICONS: [&str; 9] = [
    "infinity",
    "todos",
    "cloudUpload",
    "chat",
    "checklist",
    "bug",
    "hammer",
    "running",
    "fileTwo",
];

/// Builds the example mode.
///
/// # Example
///
/// ```
/// use modequill::document::template::{template_mode, TEMPLATE_ID};
///
/// let mode = template_mode();
/// assert_eq!(mode.id, TEMPLATE_ID);
/// assert!(mode.enabled_mcp_servers.is_empty());
/// ```
pub fn template_mode() -> Mode {
    Mode {
        id: TEMPLATE_ID.to_string(),
        name: "Mode name".to_string(),
        icon: "infinity".to_string(),
        description: Some("Mode description (optional)".to_string()),
        thinking_level: ThinkingLevel::None,
        auto_run: false,
        should_auto_apply_if_no_edit_tool: true,
        enabled_tools: TEMPLATE_TOOLS.to_vec(),
        auto_fix: true,
        enabled_mcp_servers: Vec::new(),
        custom_rules_for_ai: Some(
            "# Your rules for the AI\n\nWrite instructions for the AI here...".to_string(),
        ),
        extra: Map::new(),
    }
}

/// Hints printed after a template is written.
pub fn template_hints() -> Vec<String> {
    vec![
        format!("Available icons: {}, and others", KNOWN_ICONS.join(", ")),
        "Tools (enabledTools): 1-18, 41 and others".to_string(),
        "thinkingLevel: none, low, medium, high".to_string(),
    ]
}
