use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the catpath terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Option states within a level.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    // Focused level marker.
    pub const FOCUS: &str = "▶";
    // Separator between path segments in headers.
    pub const PATH_SEPARATOR: &str = "›";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";

    pub const SELECTED: &str = "(*)";
    pub const UNSELECTED: &str = "( )";

    pub const FOCUS: &str = ">";
    pub const PATH_SEPARATOR: &str = ">";
}

/// Pick the Unicode or ASCII variant of an icon
pub fn icon(supports_unicode: bool, unicode: &'static str, ascii: &'static str) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}

// ----------------------------------------------------------------------------
// CatpathTheme - dialoguer theme with ●/○ select items
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts using catpath design tokens.
///
/// Wraps `ColorfulTheme` and only overrides select item formatting, so the
/// current option of a level shows `●` (or `(*)` in ASCII mode).
pub struct CatpathTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl CatpathTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn selected_icon(&self) -> &'static str {
        icon(self.unicode, icons::SELECTED, icons_ascii::SELECTED)
    }

    pub fn unselected_icon(&self) -> &'static str {
        icon(self.unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
    }
}

impl Theme for CatpathTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    // Only customization: ●/○ markers on select items
    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "> {} {}", self.selected_icon(), text)
        } else {
            write!(f, "  {} {}", self.unselected_icon(), text)
        }
    }
}
