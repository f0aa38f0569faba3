//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::{SelectorOptions, DEFAULT_MAX_DEPTH, DEFAULT_PLACEHOLDER};
use crate::domain::value_objects::PathStyle;
use crate::error::CatpathResult;

use super::loader::{self, ConfigWarning};

/// Selector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Number of selector levels bound by the hosts
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default)]
    pub path_style: PathStyle,

    /// Label of the unselected option
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            path_style: PathStyle::default(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Force ASCII icons even when the terminal handles Unicode
    #[serde(default)]
    pub ascii: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CatpathResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CatpathResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (CATPATH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Options for a `CategoryPathSelector`
    pub fn selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            style: self.selector.path_style,
            placeholder: self.selector.placeholder.clone(),
        }
    }
}
