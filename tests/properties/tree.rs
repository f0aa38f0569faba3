//! Property tests for tree construction and path listing.

use std::collections::BTreeSet;

use proptest::prelude::*;

use catpath::domain::services::resolve_path;
use catpath::{CatpathError, Category, CategoryTree, PathStyle};

/// Sibling names, unique within one level
fn names(pattern: &'static str) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(pattern, 1..4).prop_map(|s| s.into_iter().collect())
}

/// A forest of up to `depth + 1` levels with dot-free names
pub fn forest(depth: u32) -> BoxedStrategy<Vec<Category>> {
    forest_of(depth, "[a-z]{1,3}")
}

/// Like `forest`, but some names span two segments (`ab.c`), drawn from a
/// small alphabet so dotted names overlap with parent/child chains. May
/// produce trees whose relative paths collide.
pub fn dotted_forest(depth: u32) -> BoxedStrategy<Vec<Category>> {
    forest_of(depth, "[a-c]{1,2}(\\.[a-c])?")
}

/// `dotted_forest` restricted to trees that pass validation
pub fn valid_dotted_forest(depth: u32) -> impl Strategy<Value = Vec<Category>> {
    dotted_forest(depth).prop_filter("relative paths must be unique", |roots| {
        CategoryTree::new(roots.clone()).is_ok()
    })
}

fn forest_of(depth: u32, pattern: &'static str) -> BoxedStrategy<Vec<Category>> {
    if depth == 0 {
        return names(pattern)
            .prop_map(|ns| ns.into_iter().map(leaf).collect())
            .boxed();
    }

    names(pattern)
        .prop_flat_map(move |ns| {
            let children =
                prop::collection::vec(prop::option::of(forest_of(depth - 1, pattern)), ns.len());
            (Just(ns), children)
        })
        .prop_map(|(ns, children)| {
            ns.into_iter()
                .zip(children)
                .map(|(name, kids)| {
                    let mut category = leaf(name);
                    category.sub_categories = kids.unwrap_or_default();
                    category
                })
                .collect()
        })
        .boxed()
}

/// Relative paths of every node, without validation
fn raw_paths(nodes: &[Category], parent: &str, out: &mut Vec<String>) {
    for category in nodes {
        let path = PathStyle::Relative.child_path(parent, &category.name);
        raw_paths(&category.sub_categories, &path, out);
        out.push(path);
    }
}

fn leaf(name: String) -> Category {
    let description = name.to_uppercase();
    Category::new(name, description)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every listed path resolves to the category it was listed for.
    #[test]
    fn property_listed_paths_resolve(roots in forest(2)) {
        let tree = CategoryTree::new(roots).unwrap();
        for entry in tree.entries(PathStyle::Relative) {
            let resolution = resolve_path(tree.roots(), &entry.path, PathStyle::Relative).unwrap();
            prop_assert_eq!(resolution.depth(), entry.depth + 1);
            prop_assert_eq!(resolution.deepest(), Some(entry.category));
        }
    }

    /// PROPERTY: with dotted names, every listed path still resolves to its own category.
    #[test]
    fn property_dotted_listed_paths_resolve(roots in valid_dotted_forest(2)) {
        let tree = CategoryTree::new(roots).unwrap();
        for entry in tree.entries(PathStyle::Relative) {
            let resolution = resolve_path(tree.roots(), &entry.path, PathStyle::Relative).unwrap();
            prop_assert_eq!(resolution.depth(), entry.depth + 1);
            prop_assert!(std::ptr::eq(resolution.deepest().unwrap(), entry.category));
        }
    }

    /// PROPERTY: a tree is accepted exactly when no two nodes share a relative path.
    #[test]
    fn property_tree_rejects_only_colliding_paths(roots in dotted_forest(2)) {
        let mut paths = Vec::new();
        raw_paths(&roots, "", &mut paths);
        let unique: BTreeSet<_> = paths.iter().collect();
        let collides = unique.len() != paths.len();

        match CategoryTree::new(roots) {
            Ok(_) => prop_assert!(!collides),
            Err(err) => {
                let is_collision = matches!(err, CatpathError::PathCollision { .. });
                prop_assert!(is_collision);
                prop_assert!(collides);
            }
        }
    }

    /// PROPERTY: the tree never lists more entries than it counts.
    #[test]
    fn property_entries_match_len(roots in forest(2)) {
        let tree = CategoryTree::new(roots).unwrap();
        prop_assert_eq!(tree.entries(PathStyle::Relative).len(), tree.len());
        prop_assert!(tree.depth() <= 3);
    }
}
