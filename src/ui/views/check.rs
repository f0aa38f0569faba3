use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::{icon, icons, icons_ascii};

/// Outcome of validating one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCheck {
    pub path: String,
    /// Error message, `None` when the path is valid
    pub error: Option<String>,
}

impl PathCheck {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

pub fn render_tree_summary(
    file: &str,
    categories: usize,
    depth: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let marker = ColoredText::success(icon(supports_unicode, icons::SUCCESS, icons_ascii::SUCCESS))
        .render(supports_color);
    format!(
        "{} {}: {} categories, {} levels deep\n",
        marker, file, categories, depth
    )
}

pub fn render_path_check(check: &PathCheck, supports_color: bool, supports_unicode: bool) -> String {
    match &check.error {
        None => {
            let marker =
                ColoredText::success(icon(supports_unicode, icons::SUCCESS, icons_ascii::SUCCESS))
                    .render(supports_color);
            format!("{} {}\n", marker, check.path)
        }
        Some(message) => {
            let marker = ColoredText::error(icon(supports_unicode, icons::ERROR, icons_ascii::ERROR))
                .render(supports_color);
            let arrow = icon(supports_unicode, icons::ARROW, icons_ascii::ARROW);
            format!(
                "{} {}\n  {} {}\n",
                marker,
                check.path,
                arrow,
                ColoredText::dim(message.as_str()).render(supports_color)
            )
        }
    }
}

pub fn render_check_summary(checks: &[PathCheck], supports_color: bool) -> String {
    let invalid = checks.iter().filter(|c| !c.is_valid()).count();
    let valid = checks.len() - invalid;
    let text = format!("{} valid, {} invalid", valid, invalid);
    let colored = if invalid == 0 {
        ColoredText::success(text)
    } else {
        ColoredText::error(text)
    };
    format!("\n{}\n", colored.render(supports_color))
}
