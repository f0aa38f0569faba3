//! Infrastructure Layer
//!
//! Concrete implementations that touch the outside world.
//!
//! ## Structure
//!
//! - `tree_loader` - Category trees from JSON / YAML / TOML files
//! - `levels/` - Headless `SelectorLevel` implementations

pub mod levels;
pub mod tree_loader;

pub use levels::MemoryLevel;
pub use tree_loader::{load_tree, parse_tree, TreeFormat};
