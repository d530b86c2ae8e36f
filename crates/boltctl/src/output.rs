//! Output formatting - plain ASCII terminal output
//!
//! Color is applied only to section headers and ids, never to entry text.

use bolt_common::{ColorMode, KnowledgeEntry};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

pub const THIN_SEP: &str = "------------------------------------------------------------";

/// Resolve the configured color mode for stdout
pub fn use_color(mode: ColorMode, no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Section header like `[KNOWLEDGE BASE]`
pub fn section(label: &str, color: bool) -> String {
    let text = format!("[{}]", label);
    if color {
        text.cyan().to_string()
    } else {
        text
    }
}

fn id_label(id: &str, color: bool) -> String {
    if color {
        id.bold().to_string()
    } else {
        id.to_string()
    }
}

/// Two-line rendering of an entry: id and topic, then indented information
pub fn format_entry(entry: &KnowledgeEntry, color: bool) -> String {
    format!(
        "  {}  {}\n      {}",
        id_label(&entry.id, color),
        entry.topic,
        entry.information
    )
}

/// Rendering of a success notice
pub fn ok(message: &str, color: bool) -> String {
    if color {
        format!("{} {}", "[OK]".bright_green(), message)
    } else {
        format!("[OK] {}", message)
    }
}
