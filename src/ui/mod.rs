//! Terminal presentation for the catpath binary.

pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod prompt;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
