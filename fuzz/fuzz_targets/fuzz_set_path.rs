#![no_main]

use catpath::{Category, CategoryPathSelector, CategoryTree, MemoryLevel, SelectorOptions};
use libfuzzer_sys::fuzz_target;

fn tree() -> CategoryTree {
    CategoryTree::new(vec![
        Category::new("A", "Animals")
            .with_child(Category::new("A.cat", "Cats"))
            .with_child(Category::new("dog", "Dogs").with_child(Category::new("pug", "Pugs"))),
        Category::new("B", "Birds"),
    ])
    .unwrap()
}

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        let Ok(mut selector) =
            CategoryPathSelector::new(tree(), MemoryLevel::bank(3), SelectorOptions::default(), "")
        else {
            return;
        };

        // A failed call must leave the committed path alone
        if selector.set_path(path).is_err() {
            assert_eq!(selector.current_path(), "");
        } else {
            assert_eq!(selector.composed_path(), selector.current_path());
        }
    }
});
