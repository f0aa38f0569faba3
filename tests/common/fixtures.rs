//! Test fixtures - reusable category trees.

/// Two-level tree whose child names contain dots
pub const ANIMALS_JSON: &str = r#"[
  {"name": "A", "description": "Animals", "subCategories": [
    {"name": "A.cat", "description": "Cats", "subCategories": []}
  ]},
  {"name": "B", "description": "Birds", "subCategories": []}
]"#;

/// Three-level tree with fully qualified names
pub const VEHICLES_QUALIFIED_JSON: &str = r#"{"categories": [
  {"name": "Vehicles", "description": "Vehicles", "subCategories": [
    {"name": "Vehicles.Cars", "description": "Cars", "subCategories": [
      {"name": "Vehicles.Cars.Sedans", "description": "Sedans"},
      {"name": "Vehicles.Cars.Coupes", "description": "Coupes"}
    ]},
    {"name": "Vehicles.Bikes", "description": "Bikes"}
  ]},
  {"name": "Food", "description": "Food"}
]}"#;

/// The same shape as YAML with relative names
pub const VEHICLES_YAML: &str = r#"
categories:
  - name: Vehicles
    subCategories:
      - name: Cars
        subCategories:
          - name: Sedans
          - name: Coupes
      - name: Bikes
  - name: Food
"#;

/// Siblings sharing a name
pub const DUPLICATE_JSON: &str = r#"[{"name": "A"}, {"name": "A"}]"#;

/// `x` > `y` and the root `x.y` share the relative path `x.y`
pub const COLLIDING_JSON: &str = r#"[
  {"name": "x", "description": "X", "subCategories": [{"name": "y", "description": "child Y of X"}]},
  {"name": "x.y", "description": "root XY"}
]"#;
