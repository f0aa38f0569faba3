use catpath::infrastructure::MemoryLevel;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icon, icons, icons_ascii};

/// Every visible level with its options; the selected option is marked
pub fn render_levels(levels: &[MemoryLevel], supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();

    for (i, level) in levels.iter().enumerate() {
        if !level.is_visible() {
            continue;
        }
        out.push_str(&ColoredText::info(format!("Level {}", i + 1)).bold().render(supports_color));
        out.push('\n');

        let selected_value = level.selected().map(|o| o.value.as_str()).unwrap_or("");
        for option in level.options() {
            let line = if option.value == selected_value {
                let marker = icon(supports_unicode, icons::SELECTED, icons_ascii::SELECTED);
                ColoredText::success(format!("{} {}", marker, option.label)).render(supports_color)
            } else if option.is_placeholder() {
                let marker = icon(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED);
                ColoredText::dim(format!("{} {}", marker, option.label)).render(supports_color)
            } else {
                let marker = icon(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED);
                format!("{} {}", marker, option.label)
            };
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

/// `Path: <path>` line, `(none)` for the empty path
pub fn render_path(path: &str, supports_color: bool) -> String {
    let shown = if path.is_empty() { "(none)" } else { path };
    format!("Path: {}\n", ColoredText::info(shown).bold().render(supports_color))
}
