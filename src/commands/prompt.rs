use anyhow::{bail, Result};
use log::debug;

use catpath::application::CategoryPathSelector;
use catpath::config::Config;
use catpath::infrastructure::MemoryLevel;

use super::TreeSession;
use crate::cli::TreeArgs;
use crate::ui::context::UiContext;
use crate::ui::prompt::{first_open_level, prompt_path};
use crate::ui::theme::CatpathTheme;

pub fn cmd_prompt(args: &TreeArgs, path: &str, config: &Config, ui: &UiContext) -> Result<()> {
    if !ui.is_interactive() {
        bail!("prompt needs an interactive terminal; use `catpath show` or `catpath check` instead");
    }

    let session = TreeSession::load(args, config)?;
    let mut selector = CategoryPathSelector::new(
        session.tree,
        MemoryLevel::bank(session.max_depth),
        session.options,
        path,
    )?;
    selector.on_selection_changed(|path| debug!("selection changed: '{}'", path));

    let theme = CatpathTheme::new(ui.unicode);
    let start = first_open_level(&selector);
    match prompt_path(&mut selector, &theme, start)? {
        Some(path) => println!("{}", path),
        None => eprintln!("Cancelled."),
    }
    Ok(())
}
