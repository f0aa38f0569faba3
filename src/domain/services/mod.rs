//! Domain Services
//!
//! Stateless logic over domain entities.

pub mod path_resolver;

pub use path_resolver::{resolve_path, Resolution, ResolvedLevel};
