//! Configuration module for catpath
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CATPATH_*)
//! 3. Explicit `--config` file, else project `.catpath.toml`
//! 4. User config (`<config dir>/catpath/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, SelectorConfig};
