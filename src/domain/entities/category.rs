//! Category tree entities.
//!
//! A `CategoryTree` is an ordered list of root `Category` nodes. Trees are
//! validated once on construction so that every later lookup can assume
//! sibling names are non-empty and unique, and that no two categories share a
//! relative path (names may contain dots, so `x` > `y` and a root named `x.y`
//! would otherwise both be `x.y`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PathStyle;
use crate::error::{CatpathError, CatpathResult};

/// A named node in the category hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Identifier, unique among siblings
    pub name: String,
    /// Display label
    #[serde(default)]
    pub description: String,
    /// Ordered children
    #[serde(default, alias = "sub_categories")]
    pub sub_categories: Vec<Category>,
}

impl Category {
    /// Create a leaf category
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sub_categories: Vec::new(),
        }
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: Category) -> Self {
        self.sub_categories.push(child);
        self
    }

    /// Label shown to users; falls back to the name when no description is set
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.sub_categories.is_empty()
    }
}

/// Find the sibling whose name equals `name`.
///
/// Returns `None` when absent; callers decide whether that is an error.
pub fn resolve_category<'a>(siblings: &'a [Category], name: &str) -> Option<&'a Category> {
    siblings.iter().find(|c| c.name == name)
}

/// A validated category tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryTree {
    roots: Vec<Category>,
}

impl CategoryTree {
    /// Validate and wrap a list of root categories.
    ///
    /// Rejects empty names, duplicate names among siblings, and distinct
    /// categories whose relative paths collide.
    pub fn new(roots: Vec<Category>) -> CatpathResult<Self> {
        validate_siblings(&roots, "the root")?;
        let tree = Self { roots };
        tree.validate_paths()?;
        Ok(tree)
    }

    pub fn roots(&self) -> &[Category] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of categories in the tree
    pub fn len(&self) -> usize {
        fn count(nodes: &[Category]) -> usize {
            nodes.iter().map(|c| 1 + count(&c.sub_categories)).sum()
        }
        count(&self.roots)
    }

    /// Depth of the deepest category (0 for an empty tree)
    pub fn depth(&self) -> usize {
        fn depth(nodes: &[Category]) -> usize {
            nodes
                .iter()
                .map(|c| 1 + depth(&c.sub_categories))
                .max()
                .unwrap_or(0)
        }
        depth(&self.roots)
    }

    /// Every category with its full path and depth, in depth-first order
    pub fn entries(&self, style: PathStyle) -> Vec<TreeEntry<'_>> {
        let mut out = Vec::with_capacity(self.len());
        collect_entries(&self.roots, "", 0, style, &mut out);
        out
    }

    fn validate_paths(&self) -> CatpathResult<()> {
        let mut seen = HashSet::with_capacity(self.len());
        for entry in self.entries(PathStyle::Relative) {
            if !seen.insert(entry.path.clone()) {
                return Err(CatpathError::PathCollision { path: entry.path });
            }
        }
        Ok(())
    }
}

/// One category together with its position in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry<'a> {
    pub path: String,
    pub depth: usize,
    pub category: &'a Category,
}

fn collect_entries<'a>(
    nodes: &'a [Category],
    parent_path: &str,
    depth: usize,
    style: PathStyle,
    out: &mut Vec<TreeEntry<'a>>,
) {
    for category in nodes {
        let path = style.child_path(parent_path, &category.name);
        out.push(TreeEntry {
            path: path.clone(),
            depth,
            category,
        });
        collect_entries(&category.sub_categories, &path, depth + 1, style, out);
    }
}

fn validate_siblings(siblings: &[Category], parent: &str) -> CatpathResult<()> {
    let mut seen = HashSet::with_capacity(siblings.len());
    for category in siblings {
        if category.name.is_empty() {
            return Err(CatpathError::EmptyCategoryName {
                parent: parent.to_string(),
            });
        }
        if !seen.insert(category.name.as_str()) {
            return Err(CatpathError::DuplicateCategory {
                name: category.name.clone(),
                parent: parent.to_string(),
            });
        }
        validate_siblings(&category.sub_categories, &format!("'{}'", category.name))?;
    }
    Ok(())
}
