//! Domain Entities
//!
//! - `Category` - A node of the category hierarchy
//! - `CategoryTree` - Validated list of root categories

mod category;

pub use category::{resolve_category, Category, CategoryTree, TreeEntry};
