//! Selector Level Port
//!
//! The rendering surface a `CategoryPathSelector` drives. One handle per
//! selector level; a handle might be an HTML select element, a native combo
//! box, or a terminal menu row.

use crate::domain::value_objects::SelectOption;

/// One dropdown-like control bound to a single depth of the category tree.
pub trait SelectorLevel {
    /// Replace the offered options.
    fn set_options(&mut self, options: Vec<SelectOption>);

    /// Select the option with this value. An empty value selects nothing.
    fn set_value(&mut self, value: &str);

    /// Currently selected value, empty when nothing is selected.
    fn value(&self) -> String;

    /// Show or hide the control.
    fn set_visible(&mut self, visible: bool);
}

impl<L: SelectorLevel + ?Sized> SelectorLevel for Box<L> {
    fn set_options(&mut self, options: Vec<SelectOption>) {
        (**self).set_options(options)
    }

    fn set_value(&mut self, value: &str) {
        (**self).set_value(value)
    }

    fn value(&self) -> String {
        (**self).value()
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible)
    }
}
