//! Property tests for CategoryPathSelector.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use proptest::sample::Index;

use catpath::{
    CatpathError, Category, CategoryPathSelector, CategoryTree, MemoryLevel, PathStyle, SelectorLevel,
    SelectorOptions,
};

use super::tree::{forest, valid_dotted_forest};

const MAX_DEPTH: usize = 4;

fn selector(tree: CategoryTree, path: &str) -> CategoryPathSelector<MemoryLevel> {
    CategoryPathSelector::new(
        tree,
        MemoryLevel::bank(MAX_DEPTH),
        SelectorOptions::default(),
        path,
    )
    .unwrap()
}

/// A tree plus one of its paths
fn tree_and_path() -> impl Strategy<Value = (CategoryTree, String)> {
    (forest(2), any::<Index>()).prop_map(pick_path)
}

/// Same, with names that may contain dots
fn dotted_tree_and_path() -> impl Strategy<Value = (CategoryTree, String)> {
    (valid_dotted_forest(2), any::<Index>()).prop_map(pick_path)
}

fn pick_path((roots, index): (Vec<Category>, Index)) -> (CategoryTree, String) {
    let tree = CategoryTree::new(roots).unwrap();
    let entries = tree.entries(PathStyle::Relative);
    let path = entries[index.index(entries.len())].path.clone();
    (tree, path)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: applying a valid path and reading the levels back yields the path.
    #[test]
    fn property_valid_path_round_trips((tree, path) in tree_and_path()) {
        let selector = selector(tree, &path);
        prop_assert_eq!(selector.current_path(), path.as_str());
        prop_assert_eq!(selector.composed_path(), path);
    }

    /// PROPERTY: with dotted names, every offered option selects its own branch.
    #[test]
    fn property_dotted_path_round_trips((tree, path) in dotted_tree_and_path()) {
        let mut selector = selector(tree, &path);
        prop_assert_eq!(selector.composed_path(), path.clone());

        let before: Vec<String> = selector.levels().iter().map(|l| l.value()).collect();
        let depth = before.iter().take_while(|v| !v.is_empty()).count();
        let offered: Vec<String> = selector
            .level(depth.min(MAX_DEPTH - 1))
            .unwrap()
            .options()
            .iter()
            .filter(|o| !o.is_placeholder())
            .map(|o| o.value.clone())
            .collect();

        for value in offered {
            let index = depth.min(MAX_DEPTH - 1);
            selector.set_path(&path).unwrap();
            selector.on_level_changed(index, &value).unwrap();
            prop_assert_eq!(selector.composed_path(), value.clone());
            let kept: Vec<String> = selector.levels()[..index].iter().map(|l| l.value()).collect();
            prop_assert_eq!(kept, before[..index].to_vec());
        }
    }

    /// PROPERTY: an invalid path fails and leaves every level untouched.
    #[test]
    fn property_invalid_path_changes_nothing((tree, path) in tree_and_path()) {
        let mut selector = selector(tree, &path);
        let before = selector.levels().to_vec();

        // Generated names are at most three letters long
        let bad = format!("{}.zzzz", path);
        let err = selector.set_path(&bad).unwrap_err();

        let is_invalid_path = matches!(err, CatpathError::InvalidPath { .. });
        prop_assert!(is_invalid_path);
        prop_assert_eq!(selector.levels(), before.as_slice());
        prop_assert_eq!(selector.current_path(), path.as_str());
    }

    /// PROPERTY: setting the same path twice notifies once.
    #[test]
    fn property_repeated_path_notifies_once((tree, path) in tree_and_path()) {
        let mut selector = selector(tree, "");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        selector.on_selection_changed(move |p| sink.borrow_mut().push(p.to_string()));

        selector.set_path(&path).unwrap();
        selector.set_path(&path).unwrap();

        prop_assert_eq!(seen.borrow().clone(), vec![path]);
    }

    /// PROPERTY: clearing level k falls back to the path held by level k-1.
    #[test]
    fn property_clearing_a_level_falls_back_to_parent(
        (tree, path) in tree_and_path(),
        pick in any::<Index>(),
    ) {
        let mut selector = selector(tree, &path);
        let depth = path.split('.').count();
        let k = 1 + pick.index(depth.min(MAX_DEPTH - 1));
        let parent = selector.level(k - 1).unwrap().value();

        selector.on_level_changed(k, "").unwrap();
        prop_assert_eq!(selector.current_path(), parent.as_str());
    }

    /// PROPERTY: the empty path shows only level 0, unselected.
    #[test]
    fn property_empty_path_shows_only_roots((tree, path) in tree_and_path()) {
        let mut selector = selector(tree, &path);
        selector.set_path("").unwrap();

        let levels = selector.levels();
        prop_assert!(levels[0].is_visible());
        prop_assert_eq!(levels[0].value(), "");
        prop_assert!(levels[1..].iter().all(|l| !l.is_visible()));
    }
}
