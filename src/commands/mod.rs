//! Command implementations for the catpath binary.

mod check;
mod list;
mod pick;
mod prompt;
mod show;

pub use check::cmd_check;
pub use list::cmd_list;
pub use pick::cmd_pick;
pub use prompt::cmd_prompt;
pub use show::cmd_show;

use anyhow::{Context, Result};
use log::debug;

use catpath::application::SelectorOptions;
use catpath::config::Config;
use catpath::domain::entities::CategoryTree;
use catpath::infrastructure::load_tree;

use crate::cli::TreeArgs;

/// Tree plus the selector settings resolved from flags and config
pub(crate) struct TreeSession {
    pub tree: CategoryTree,
    pub options: SelectorOptions,
    pub max_depth: usize,
}

impl TreeSession {
    pub fn load(args: &TreeArgs, config: &Config) -> Result<Self> {
        let tree = load_tree(&args.tree)
            .with_context(|| format!("Unable to load category tree {}", args.tree.display()))?;
        let (options, max_depth) = selector_settings(args, config);
        debug!(
            "style={} max_depth={} placeholder='{}'",
            options.style, max_depth, options.placeholder
        );
        Ok(Self {
            tree,
            options,
            max_depth,
        })
    }
}

/// Flags win over config values
fn selector_settings(args: &TreeArgs, config: &Config) -> (SelectorOptions, usize) {
    let mut options = config.selector_options();
    if let Some(style) = args.style {
        options.style = style;
    }
    let max_depth = args
        .max_depth
        .map(usize::from)
        .unwrap_or(config.selector.max_depth);
    (options, max_depth)
}
