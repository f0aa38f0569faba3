//! Path style value object - how category names compose into paths

use serde::{Deserialize, Serialize};

/// Naming convention for category names
///
/// - `Relative`: a name is the node's own segment(s); a path joins names with `.`
/// - `Qualified`: every name already holds the node's full dotted path
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Names are local segments (default)
    #[default]
    Relative,
    /// Names are fully qualified dotted paths
    Qualified,
}

impl PathStyle {
    /// Separator between path segments
    pub const SEPARATOR: char = '.';

    /// Full path of a child named `name` under a parent at `parent_path`
    pub fn child_path(&self, parent_path: &str, name: &str) -> String {
        match self {
            PathStyle::Qualified => name.to_string(),
            PathStyle::Relative if parent_path.is_empty() => name.to_string(),
            PathStyle::Relative => format!("{}{}{}", parent_path, Self::SEPARATOR, name),
        }
    }

    /// Parse a style name, accepting the serialized spellings
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "relative" => Some(PathStyle::Relative),
            "qualified" | "absolute" => Some(PathStyle::Qualified),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PathStyle::Relative => "relative",
            PathStyle::Qualified => "qualified",
        }
    }
}

impl std::fmt::Display for PathStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
