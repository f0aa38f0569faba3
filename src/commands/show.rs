use anyhow::Result;

use catpath::application::CategoryPathSelector;
use catpath::config::Config;
use catpath::domain::ports::SelectorLevel;
use catpath::infrastructure::MemoryLevel;

use super::TreeSession;
use crate::cli::TreeArgs;
use crate::ui::context::UiContext;
use crate::ui::json::emit;
use crate::ui::views::show::{render_levels, render_path};

pub fn cmd_show(args: &TreeArgs, path: &str, config: &Config, ui: &UiContext) -> Result<()> {
    let session = TreeSession::load(args, config)?;
    let selector = CategoryPathSelector::new(
        session.tree,
        MemoryLevel::bank(session.max_depth),
        session.options,
        path,
    )?;

    if ui.json {
        for (index, level) in selector.levels().iter().enumerate() {
            if !level.is_visible() {
                continue;
            }
            emit(serde_json::json!({
                "event": "level",
                "index": index,
                "value": level.value(),
                "options": level.options(),
            }))?;
        }
        emit(serde_json::json!({
            "event": "complete",
            "command": "show",
            "path": selector.composed_path(),
        }))?;
        return Ok(());
    }

    print!("{}", render_levels(selector.levels(), ui.color, ui.unicode));
    print!("{}", render_path(&selector.composed_path(), ui.color));
    Ok(())
}
