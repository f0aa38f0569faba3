//! catpath - cascading category path selection
//!
//! A [`CategoryPathSelector`] keeps a row of selector levels in sync with a
//! dotted path into a category tree. Rendering surfaces plug in through the
//! [`SelectorLevel`] trait; [`MemoryLevel`] is the headless implementation.
//!
//! ```
//! use catpath::{Category, CategoryPathSelector, CategoryTree, MemoryLevel, SelectorOptions};
//!
//! let tree = CategoryTree::new(vec![
//!     Category::new("A", "Animals").with_child(Category::new("A.cat", "Cats")),
//!     Category::new("B", "Birds"),
//! ])?;
//! let selector = CategoryPathSelector::new(
//!     tree,
//!     MemoryLevel::bank(6),
//!     SelectorOptions::default(),
//!     "A.A.cat",
//! )?;
//! assert_eq!(selector.composed_path(), "A.A.cat");
//! # Ok::<(), catpath::CatpathError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CategoryPathSelector, LevelState, SelectorOptions};
pub use config::Config;
pub use domain::entities::{resolve_category, Category, CategoryTree};
pub use domain::ports::SelectorLevel;
pub use domain::value_objects::{PathStyle, SelectOption};
pub use error::{CatpathError, CatpathResult};
pub use infrastructure::{load_tree, MemoryLevel};
