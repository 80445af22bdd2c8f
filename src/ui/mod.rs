//! Console presentation of modes.
//!
//! This module renders the mode summaries printed by `modequill list` and the
//! interactive [`menu`].

pub mod menu;

use crate::document::mode::Mode;
use std::io::{self, Write};

/// Renders one numbered mode summary block.
///
/// # Example
///
/// ```
/// use modequill::document::template::template_mode;
/// use modequill::ui::format_mode_summary;
///
/// let text = format_mode_summary(1, &template_mode());
/// assert!(text.starts_with("1. [custom] Mode name"));
/// ```
pub fn format_mode_summary(index: usize, mode: &Mode) -> String {
    let kind = if mode.is_builtin() { "built-in" } else { "custom" };
    let mut lines = vec![
        format!("{}. [{}] {}", index, kind, mode.display_name()),
        format!("   ID: {}", mode.id),
        format!(
            "   Icon: {}",
            if mode.icon.is_empty() {
                "not set"
            } else {
                mode.icon.as_str()
            }
        ),
        format!(
            "   Description: {}",
            mode.description.as_deref().unwrap_or("none")
        ),
        format!("   Thinking: {}", mode.thinking_level),
        format!("   AutoRun: {}", mode.auto_run),
        format!("   AutoFix: {}", mode.auto_fix),
        format!("   Tools: {} enabled", mode.enabled_tools.len()),
        format!("   MCP servers: {} enabled", mode.enabled_mcp_servers.len()),
    ];

    if let Some(rules) = mode.custom_rules_for_ai.as_deref().filter(|r| !r.is_empty()) {
        lines.push(format!(
            "   Custom rules: yes ({} characters)",
            rules.chars().count()
        ));
    }

    lines.join("\n")
}

/// Prints a list of modes followed by a total.
pub fn print_mode_list<W: Write>(out: &mut W, modes: &[Mode]) -> io::Result<()> {
    writeln!(out, "=== Modes ===")?;
    writeln!(out)?;
    for (i, mode) in modes.iter().enumerate() {
        writeln!(out, "{}", format_mode_summary(i + 1, mode))?;
        writeln!(out)?;
    }
    writeln!(out, "Total modes: {}", modes.len())
}
