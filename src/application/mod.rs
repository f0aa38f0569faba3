//! Application Layer
//!
//! Components that orchestrate domain logic over the `SelectorLevel` port.
//!
//! - `CategoryPathSelector` - Keeps a row of selector levels in sync with a path

pub mod selector;

pub use selector::{
    plan_levels, CategoryPathSelector, LevelState, SelectorOptions, DEFAULT_MAX_DEPTH,
    DEFAULT_PLACEHOLDER, MAX_SELECTOR_LEVELS,
};
