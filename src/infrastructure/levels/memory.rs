//! In-memory selector level.
//!
//! Behaves like an HTML `<select>`: assigning a value that is not among the
//! current options leaves nothing selected.

use crate::domain::ports::SelectorLevel;
use crate::domain::value_objects::SelectOption;

/// A headless `SelectorLevel`, used by non-interactive commands and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLevel {
    options: Vec<SelectOption>,
    value: String,
    visible: bool,
}

impl MemoryLevel {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` fresh, hidden levels
    pub fn bank(count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::new()).collect()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The option currently selected, `None` when the placeholder is
    pub fn selected(&self) -> Option<&SelectOption> {
        if self.value.is_empty() {
            return None;
        }
        self.options.iter().find(|o| o.value == self.value)
    }
}

impl SelectorLevel for MemoryLevel {
    fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        if !self.options.iter().any(|o| o.value == self.value) {
            self.value.clear();
        }
    }

    fn set_value(&mut self, value: &str) {
        if self.options.iter().any(|o| o.value == value) {
            self.value = value.to_string();
        } else {
            self.value.clear();
        }
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
