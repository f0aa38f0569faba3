//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::application::MAX_SELECTOR_LEVELS;
use crate::domain::value_objects::PathStyle;
use crate::error::{CatpathError, CatpathResult};

use super::types::Config;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = ".catpath.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CatpathResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CatpathError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !valid_max_depth(config.selector.max_depth) {
        return Err(CatpathError::ConfigParse {
            file: path.to_path_buf(),
            message: format!(
                "selector.max_depth = {} is out of range (1..={})",
                config.selector.max_depth, MAX_SELECTOR_LEVELS
            ),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                debug!("using config {}", path.display());
                return (with_env_overrides(config), warnings);
            }
            Err(e) => warn!("ignoring config {}: {}", path.display(), e),
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (CATPATH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // CATPATH_MAX_DEPTH
    if let Some(depth) = get_env("CATPATH_MAX_DEPTH") {
        match depth.trim().parse::<usize>() {
            Ok(depth) if valid_max_depth(depth) => config.selector.max_depth = depth,
            _ => warn!(
                "ignoring CATPATH_MAX_DEPTH='{}': expected a number in 1..={}",
                depth, MAX_SELECTOR_LEVELS
            ),
        }
    }

    // CATPATH_PATH_STYLE
    if let Some(style) = get_env("CATPATH_PATH_STYLE") {
        match PathStyle::parse(&style) {
            Some(style) => config.selector.path_style = style,
            None => warn!("ignoring CATPATH_PATH_STYLE='{}'", style),
        }
    }

    // CATPATH_PLACEHOLDER
    if let Some(placeholder) = get_env("CATPATH_PLACEHOLDER") {
        config.selector.placeholder = placeholder;
    }

    // CATPATH_ASCII
    if let Some(val) = get_env("CATPATH_ASCII") {
        config.output.ascii = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn valid_max_depth(depth: usize) -> bool {
    (1..=MAX_SELECTOR_LEVELS).contains(&depth)
}

/// `CATPATH_USER_CONFIG`, else `<config dir>/catpath/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CATPATH_USER_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("catpath").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "selector",
        "max_depth",
        "path_style",
        "placeholder",
        "output",
        "ascii",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
