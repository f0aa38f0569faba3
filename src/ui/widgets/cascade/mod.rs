//! Cascade Picker Widget
//!
//! Drives a `CategoryPathSelector` from the keyboard, one terminal level per
//! selector level.
//!
//! # Module Structure
//!
//! - `level` - `SelectorLevel` implementation backed by terminal state
//! - `picker` - CascadePicker state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod level;
mod picker;
mod render;

pub use input::run_interactive;
pub use level::TerminalLevel;
pub use picker::CascadePicker;
