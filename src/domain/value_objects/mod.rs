//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod path_style;
mod select_option;

pub use path_style::PathStyle;
pub use select_option::SelectOption;
