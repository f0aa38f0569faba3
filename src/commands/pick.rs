use anyhow::{bail, Result};
use log::debug;

use catpath::application::CategoryPathSelector;
use catpath::config::Config;

use super::TreeSession;
use crate::cli::TreeArgs;
use crate::ui::context::UiContext;
use crate::ui::widgets::cascade::{run_interactive, CascadePicker, TerminalLevel};

pub fn cmd_pick(args: &TreeArgs, path: &str, config: &Config, ui: &UiContext) -> Result<()> {
    if !ui.is_interactive() {
        bail!("pick needs an interactive terminal; use `catpath show` or `catpath check` instead");
    }

    let session = TreeSession::load(args, config)?;
    let mut selector = CategoryPathSelector::new(
        session.tree,
        TerminalLevel::bank(session.max_depth),
        session.options,
        path,
    )?;
    selector.on_selection_changed(|path| debug!("selection changed: '{}'", path));

    let mut picker = CascadePicker::new(selector);
    match run_interactive(&mut picker, ui.unicode, ui.width())? {
        Some(path) => println!("{}", path),
        None => eprintln!("Cancelled."),
    }
    Ok(())
}
