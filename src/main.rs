//! catpath CLI - cascading category path selector
//!
//! Usage: catpath <COMMAND>
//!
//! Commands:
//!   pick    Pick a path with the interactive cascade widget
//!   prompt  Pick a path with one prompt per level
//!   show    Apply a path and print every visible level
//!   check   Validate the tree and the given paths
//!   list    List every path in the tree

mod cli;
mod commands;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};

use catpath::config::Config;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<(Config, Vec<catpath::config::ConfigWarning>)> {
    match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("Unable to read config file {}", path.display()))?;
            Ok((config.with_env_overrides(), warnings))
        }
        None => {
            let cwd = std::env::current_dir()?;
            Ok(Config::load_or_default(Some(&cwd)))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = load_config(&cli)?;
    debug!("{:?}", config);

    let ui = UiContext::new(cli.json, cli.verbose, &config);
    if !ui.json {
        ui::output::print_config_warnings(&warnings, ui.color, ui.unicode);
    }

    match &cli.command {
        Commands::Pick { tree, path } => commands::cmd_pick(tree, path, &config, &ui),
        Commands::Prompt { tree, path } => commands::cmd_prompt(tree, path, &config, &ui),
        Commands::Show { tree, path } => commands::cmd_show(tree, path, &config, &ui),
        Commands::Check { tree, paths } => commands::cmd_check(tree, paths, &config, &ui),
        Commands::List { tree } => commands::cmd_list(tree, &config, &ui),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
