//! Terminal rendering functions for the cascade picker.

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::truncate_to_width;
use crate::ui::theme::{icon, icons, icons_ascii};

use super::level::TerminalLevel;

/// Columns taken by the option markers under a focused level
const OPTION_INDENT: &str = "     ";

/// Render the composed path as `Path: A › B`
pub fn render_path_header(levels: &[TerminalLevel], supports_unicode: bool, width: usize) -> String {
    let separator = format!(
        " {} ",
        icon(supports_unicode, icons::PATH_SEPARATOR, icons_ascii::PATH_SEPARATOR)
    );

    let labels: Vec<&str> = levels
        .iter()
        .take_while(|l| l.is_visible())
        .map_while(TerminalLevel::selected_label)
        .collect();

    let path = if labels.is_empty() {
        String::from("(none)")
    } else {
        labels.join(&separator)
    };

    truncate_to_width(&format!("Path: {}", path), width)
}

/// Render one level; the focused level also lists its options
pub fn render_level(
    index: usize,
    level: &TerminalLevel,
    focused: bool,
    supports_unicode: bool,
    width: usize,
) -> String {
    let marker = if focused {
        icon(supports_unicode, icons::FOCUS, icons_ascii::FOCUS)
    } else {
        " "
    };

    let prefix = format!("{} {}. ", marker, index + 1);
    let current = level
        .selected_label()
        .or_else(|| level.options().first().map(|o| o.label.as_str()))
        .unwrap_or_default();

    let mut out = format!(
        "{}{}\n",
        prefix,
        truncate_to_width(current, width.saturating_sub(prefix.width()))
    );

    if !focused {
        return out;
    }

    let cursor = level.cursor();
    for (i, option) in level.options().iter().enumerate() {
        let state_icon = if i == cursor {
            icon(supports_unicode, icons::SELECTED, icons_ascii::SELECTED)
        } else {
            icon(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
        };
        let lead = format!("{}{} ", OPTION_INDENT, state_icon);
        out.push_str(&lead);
        out.push_str(&truncate_to_width(
            &option.label,
            width.saturating_sub(lead.width()),
        ));
        out.push('\n');
    }

    out
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[Enter] Confirm    [Backspace] Clear    [q] Quit\n\
         (Use ↑↓ to change the option, ←→ or Tab to move between levels)",
    )
}
