//! Domain Layer
//!
//! Pure category-tree logic without I/O or terminal dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Category and CategoryTree
//! - `value_objects/` - PathStyle, SelectOption
//! - `services/` - Path resolution
//! - `ports/` - The `SelectorLevel` rendering contract

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
