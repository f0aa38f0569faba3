//! CascadePicker state management and action handling.
//!
//! Wraps a `CategoryPathSelector` over terminal levels and tracks which
//! level has keyboard focus.

use catpath::application::CategoryPathSelector;
use catpath::error::CatpathResult;

use super::level::TerminalLevel;
use super::render::{render_help_bar, render_level, render_path_header};

/// Picker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeAction {
    /// Select the previous option of the focused level
    Previous,
    /// Select the next option of the focused level
    Next,
    /// Move focus one level up
    FocusUp,
    /// Move focus one level down
    FocusDown,
    /// Clear the focused level
    Clear,
    /// Accept the current path
    Confirm,
    /// Leave without a selection
    Quit,
}

/// Interactive cascade of selector levels
pub struct CascadePicker {
    selector: CategoryPathSelector<TerminalLevel>,
    focus: usize,
}

impl CascadePicker {
    /// Create a picker; focus starts on the deepest visible level
    pub fn new(selector: CategoryPathSelector<TerminalLevel>) -> Self {
        let mut picker = Self { selector, focus: 0 };
        picker.focus = picker.last_visible();
        picker
    }

    pub fn selector(&self) -> &CategoryPathSelector<TerminalLevel> {
        &self.selector
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn current_path(&self) -> &str {
        self.selector().current_path()
    }

    /// Handle an action. Returns true when the picker should close.
    pub fn handle_action(&mut self, action: CascadeAction) -> CatpathResult<bool> {
        match action {
            CascadeAction::Previous => self.step(-1)?,
            CascadeAction::Next => self.step(1)?,
            CascadeAction::FocusUp => {
                self.focus = self.focus.saturating_sub(1);
            }
            CascadeAction::FocusDown => {
                if self.is_visible(self.focus + 1) {
                    self.focus += 1;
                }
            }
            CascadeAction::Clear => {
                self.selector.on_level_changed(self.focus, "")?;
            }
            CascadeAction::Confirm | CascadeAction::Quit => return Ok(true),
        }

        self.focus = self.focus.min(self.last_visible());
        Ok(false)
    }

    fn step(&mut self, step: isize) -> CatpathResult<()> {
        let Some(level) = self.selector.level(self.focus) else {
            return Ok(());
        };
        let Some(value) = level.value_at_offset(step).map(str::to_string) else {
            return Ok(());
        };
        self.selector.on_level_changed(self.focus, &value)?;
        Ok(())
    }

    fn is_visible(&self, index: usize) -> bool {
        self.selector
            .level(index)
            .map(TerminalLevel::is_visible)
            .unwrap_or(false)
    }

    fn last_visible(&self) -> usize {
        self.selector
            .levels()
            .iter()
            .rposition(TerminalLevel::is_visible)
            .unwrap_or(0)
    }

    /// Render the full picker body
    pub fn render(&self, supports_unicode: bool, width: usize) -> String {
        let mut out = String::new();
        out.push_str(&render_path_header(self.selector.levels(), supports_unicode, width));
        out.push('\n');

        for (i, level) in self.selector.levels().iter().enumerate() {
            if !level.is_visible() {
                continue;
            }
            out.push_str(&render_level(i, level, i == self.focus(), supports_unicode, width));
        }

        out
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }
}
