use anyhow::{bail, Result};
use log::info;

use catpath::application::plan_levels;
use catpath::config::Config;

use super::TreeSession;
use crate::cli::TreeArgs;
use crate::ui::context::UiContext;
use crate::ui::json::emit;
use crate::ui::views::check::{
    render_check_summary, render_path_check, render_tree_summary, PathCheck,
};

pub fn cmd_check(args: &TreeArgs, paths: &[String], config: &Config, ui: &UiContext) -> Result<()> {
    let session = TreeSession::load(args, config)?;

    let checks: Vec<PathCheck> = paths
        .iter()
        .map(|path| PathCheck {
            path: path.clone(),
            error: plan_levels(&session.tree, path, &session.options, session.max_depth)
                .err()
                .map(|e| e.to_string()),
        })
        .collect();
    let invalid = checks.iter().filter(|c| !c.is_valid()).count();
    info!("checked {} paths, {} invalid", checks.len(), invalid);

    if ui.json {
        emit(serde_json::json!({
            "event": "tree",
            "file": args.tree.display().to_string(),
            "categories": session.tree.len(),
            "depth": session.tree.depth(),
        }))?;
        for check in &checks {
            emit(serde_json::json!({
                "event": "path",
                "path": check.path,
                "valid": check.is_valid(),
                "error": check.error,
            }))?;
        }
        emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "valid": checks.len() - invalid,
            "invalid": invalid,
        }))?;
    } else {
        print!(
            "{}",
            render_tree_summary(
                &args.tree.display().to_string(),
                session.tree.len(),
                session.tree.depth(),
                ui.color,
                ui.unicode
            )
        );
        for check in &checks {
            print!("{}", render_path_check(check, ui.color, ui.unicode));
        }
        if !checks.is_empty() {
            print!("{}", render_check_summary(&checks, ui.color));
        }
    }

    if invalid > 0 {
        bail!("{} of {} paths are invalid", invalid, checks.len());
    }
    Ok(())
}
