use catpath::config::ConfigWarning;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icon, icons, icons_ascii};

pub fn print_config_warnings(warnings: &[ConfigWarning], color: bool, unicode: bool) {
    for w in warnings {
        eprint!("{}", render_config_warning(w, color, unicode));
    }
}

fn render_config_warning(w: &ConfigWarning, color: bool, unicode: bool) -> String {
    let marker = ColoredText::warning(icon(unicode, icons::WARNING, icons_ascii::WARNING)).render(color);

    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    let mut out = format!("{} Unknown config key '{}' in {}\n", marker, w.key, location);

    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}
