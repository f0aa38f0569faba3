use anyhow::Result;

use catpath::config::Config;

use super::TreeSession;
use crate::cli::TreeArgs;
use crate::ui::context::UiContext;
use crate::ui::json::emit;
use crate::ui::views::list::render_entries;

pub fn cmd_list(args: &TreeArgs, config: &Config, ui: &UiContext) -> Result<()> {
    let session = TreeSession::load(args, config)?;
    let entries = session.tree.entries(session.options.style);

    if ui.json {
        for entry in &entries {
            emit(serde_json::json!({
                "event": "entry",
                "path": entry.path,
                "depth": entry.depth,
                "description": entry.category.label(),
            }))?;
        }
        emit(serde_json::json!({
            "event": "complete",
            "command": "list",
            "count": entries.len(),
        }))?;
        return Ok(());
    }

    print!("{}", render_entries(&entries, ui.color));
    Ok(())
}
