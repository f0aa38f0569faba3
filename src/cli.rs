use std::path::PathBuf;

use catpath::application::MAX_SELECTOR_LEVELS;
use catpath::domain::value_objects::PathStyle;
use clap::{Args, Parser, Subcommand};

/// catpath - pick category paths from cascading selectors
#[derive(Parser, Debug)]
#[command(name = "catpath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to .catpath.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads a tree
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Category tree file (.json, .yaml, .yml or .toml)
    #[arg(short, long, default_value = "categories.json")]
    pub tree: PathBuf,

    /// How category names form paths (overrides config)
    #[arg(long, value_enum)]
    pub style: Option<PathStyle>,

    /// Number of selector levels, at most 64 (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_SELECTOR_LEVELS as i64))]
    pub max_depth: Option<u16>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a path with the interactive cascade widget
    Pick {
        #[command(flatten)]
        tree: TreeArgs,

        /// Initial path
        #[arg(short, long, default_value = "")]
        path: String,
    },

    /// Pick a path with one prompt per level
    Prompt {
        #[command(flatten)]
        tree: TreeArgs,

        /// Initial path
        #[arg(short, long, default_value = "")]
        path: String,
    },

    /// Apply a path and print every visible level
    Show {
        #[command(flatten)]
        tree: TreeArgs,

        /// Path to apply
        #[arg(default_value = "")]
        path: String,
    },

    /// Validate the tree and the given paths
    Check {
        #[command(flatten)]
        tree: TreeArgs,

        /// Paths to validate
        paths: Vec<String>,
    },

    /// List every path in the tree
    List {
        #[command(flatten)]
        tree: TreeArgs,
    },
}
