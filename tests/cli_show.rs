mod common;

use common::*;

#[test]
fn test_show_prints_levels_for_path() {
    let env = TestEnv::with_tree(ANIMALS_JSON);
    let result = env.run(&["show", "A.A.cat"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stdout,
        "Level 1\n  ( ) ---\n  (*) Animals\n  ( ) Birds\n\
         Level 2\n  ( ) ---\n  (*) Cats\n\
         Path: A.A.cat\n"
    );
}

#[test]
fn test_show_empty_path_offers_roots_only() {
    let env = TestEnv::with_tree(ANIMALS_JSON);
    let result = env.run(&["show"]);

    assert!(result.success);
    assert_eq!(
        result.stdout,
        "Level 1\n  (*) ---\n  ( ) Animals\n  ( ) Birds\nPath: (none)\n"
    );
}

#[test]
fn test_show_invalid_path_fails_with_position() {
    let env = TestEnv::with_tree(ANIMALS_JSON);
    let result = env.run(&["show", "A.Z"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("segment 'Z' at position 1"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stdout.is_empty());
}

#[test]
fn test_show_path_deeper_than_max_depth_fails() {
    let env = TestEnv::with_tree(ANIMALS_JSON);
    let result = env.run(&["show", "--max-depth", "1", "A.A.cat"]);

    assert!(!result.success);
    assert!(result.stderr.contains("2 levels deep"), "stderr:\n{}", result.stderr);
}

#[test]
fn test_show_qualified_style() {
    let env = TestEnv::with_tree(VEHICLES_QUALIFIED_JSON);
    let result = env.run(&["show", "--style", "qualified", "Vehicles.Cars"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Level 3\n  (*) ---\n  ( ) Sedans\n  ( ) Coupes\n"));
    assert!(result.stdout.ends_with("Path: Vehicles.Cars\n"));
}

#[test]
fn test_show_reads_yaml_tree() {
    let env = TestEnv::new();
    env.write("tree.yaml", VEHICLES_YAML);
    let result = env.run(&["show", "--tree", "tree.yaml", "Vehicles.Bikes"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("(*) Bikes"));
    assert!(!result.stdout.contains("Level 3"));
}

#[test]
fn test_show_json_events() {
    let env = TestEnv::with_tree(ANIMALS_JSON);
    let result = env.run(&["show", "--json", "A"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let events = result.events();
    assert_eq!(events.len(), 3);

    assert_eq!(events[0]["event"], "level");
    assert_eq!(events[0]["value"], "A");
    assert_eq!(events[0]["options"][1]["label"], "Animals");

    assert_eq!(events[1]["index"], 1);
    assert_eq!(events[1]["value"], "");
    assert_eq!(events[1]["options"][1]["value"], "A.A.cat");

    assert_eq!(events[2]["event"], "complete");
    assert_eq!(events[2]["path"], "A");
}

#[test]
fn test_show_missing_tree_names_the_file() {
    let env = TestEnv::new();
    let result = env.run(&["show"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("Unable to load category tree categories.json"),
        "stderr:\n{}",
        result.stderr
    );
}
