//! Terminal-backed selector level.
//!
//! Holds the options of one level plus the index of the selected option, so
//! the picker can step through options with the arrow keys.

use catpath::domain::ports::SelectorLevel;
use catpath::domain::value_objects::SelectOption;

/// One level of the cascade as drawn in the terminal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalLevel {
    options: Vec<SelectOption>,
    /// Index into `options`; `None` when nothing is selected
    selected: Option<usize>,
    visible: bool,
}

impl TerminalLevel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bank(count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::new()).collect()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index of the highlighted option; the placeholder (0) when unselected
    pub fn cursor(&self) -> usize {
        self.selected.unwrap_or(0)
    }

    /// Label of the selected option, `None` when unselected
    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .filter(|o| !o.is_placeholder())
            .map(|o| o.label.as_str())
    }

    /// Value of the option `step` places away from the cursor, clamped to the list
    pub fn value_at_offset(&self, step: isize) -> Option<&str> {
        if self.options.is_empty() {
            return None;
        }
        let last = self.options.len() - 1;
        let target = self.cursor().saturating_add_signed(step).min(last);
        self.options.get(target).map(|o| o.value.as_str())
    }
}

impl SelectorLevel for TerminalLevel {
    fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.selected = None;
    }

    fn set_value(&mut self, value: &str) {
        self.selected = if value.is_empty() {
            None
        } else {
            self.options.iter().position(|o| o.value == value)
        };
    }

    fn value(&self) -> String {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
