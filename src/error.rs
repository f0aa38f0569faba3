//! Error types for catpath
//!
//! Library code returns `CatpathError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catpath operations
pub type CatpathResult<T> = Result<T, CatpathError>;

/// Main error type for catpath operations
#[derive(Error, Debug)]
pub enum CatpathError {
    /// A path segment did not match any category among its siblings
    #[error("invalid category path: segment '{segment}' at position {position} does not match any category")]
    InvalidPath { segment: String, position: usize },

    /// Path resolves to more levels than there are selector handles
    #[error("category path is {depth} levels deep but only {max_depth} selector levels are available")]
    PathTooDeep { depth: usize, max_depth: usize },

    /// A level index outside the bound selector handles
    #[error("selector level {index} is out of range (0..{max_depth})")]
    LevelOutOfRange { index: usize, max_depth: usize },

    /// Selector constructed without any level handles
    #[error("a category selector needs at least one selector level")]
    NoLevels,

    /// Two siblings share the same name
    #[error("duplicate category '{name}' under {parent}")]
    DuplicateCategory { name: String, parent: String },

    /// Two different categories compose to the same path
    #[error("categories collide on path '{path}'")]
    PathCollision { path: String },

    /// A category with an empty name
    #[error("empty category name under {parent}")]
    EmptyCategoryName { parent: String },

    /// Tree file could not be deserialized
    #[error("invalid category tree in {file}: {message}")]
    TreeParse { file: PathBuf, message: String },

    /// Tree file extension is not json, yaml, yml or toml
    #[error("unsupported category tree format '{extension}' for {file} (expected json, yaml or toml)")]
    UnsupportedTreeFormat { extension: String, file: PathBuf },

    /// Config file could not be deserialized
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
