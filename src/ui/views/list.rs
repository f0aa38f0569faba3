use unicode_width::UnicodeWidthStr;

use catpath::domain::entities::TreeEntry;

use crate::ui::primitives::text::{pad_to_width, ColoredText};

/// Every tree path, indented by depth, with its description aligned
pub fn render_entries(entries: &[TreeEntry<'_>], supports_color: bool) -> String {
    let column = entries
        .iter()
        .map(|e| indent(e.depth).width() + e.path.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let name = format!("{}{}", indent(entry.depth), entry.path);
        out.push_str(&pad_to_width(&name, column));
        out.push_str("  ");
        out.push_str(&ColoredText::dim(entry.category.label()).render(supports_color));
        out.push('\n');
    }
    out
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
