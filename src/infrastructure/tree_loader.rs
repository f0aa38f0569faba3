//! Category Tree Loader
//!
//! Reads category trees from JSON, YAML or TOML files. A document is either a
//! bare list of categories or a table with a `categories` list; TOML only
//! allows the latter.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::domain::entities::{Category, CategoryTree};
use crate::error::{CatpathError, CatpathResult};

/// Serialization format of a tree file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Yaml,
    Toml,
}

impl TreeFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> CatpathResult<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(TreeFormat::Json),
            "yaml" | "yml" => Ok(TreeFormat::Yaml),
            "toml" => Ok(TreeFormat::Toml),
            _ => Err(CatpathError::UnsupportedTreeFormat {
                extension,
                file: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TreeDocument {
    List(Vec<Category>),
    Table { categories: Vec<Category> },
}

impl TreeDocument {
    fn into_roots(self) -> Vec<Category> {
        match self {
            TreeDocument::List(roots) => roots,
            TreeDocument::Table { categories } => categories,
        }
    }
}

/// Load and validate a category tree from `path`
pub fn load_tree(path: &Path) -> CatpathResult<CategoryTree> {
    let format = TreeFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let tree = parse_tree(&content, format, path)?;
    info!(
        "loaded {} categories ({} levels deep) from {}",
        tree.len(),
        tree.depth(),
        path.display()
    );
    Ok(tree)
}

/// Parse and validate a category tree; `file` is only used in error messages
pub fn parse_tree(content: &str, format: TreeFormat, file: &Path) -> CatpathResult<CategoryTree> {
    let parse_error = |message: String| CatpathError::TreeParse {
        file: file.to_path_buf(),
        message,
    };

    let document: TreeDocument = match format {
        TreeFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        TreeFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        TreeFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
    };

    CategoryTree::new(document.into_roots())
}
