//! Level-by-level dialoguer prompts.
//!
//! Each visible level becomes one select prompt. Choosing a category moves on
//! to the next level; choosing the placeholder stops at the parent selection.

use anyhow::Result;
use dialoguer::{FuzzySelect, Select};

use catpath::application::CategoryPathSelector;
use catpath::domain::ports::SelectorLevel;
use catpath::infrastructure::MemoryLevel;

use crate::ui::theme::CatpathTheme;

/// Levels with more options than this get a fuzzy-search prompt
const FUZZY_THRESHOLD: usize = 10;

/// Prompt through the levels starting at `start`.
/// Returns the chosen path, or `None` when the user pressed Esc.
pub fn prompt_path(
    selector: &mut CategoryPathSelector<MemoryLevel>,
    theme: &CatpathTheme,
    start: usize,
) -> Result<Option<String>> {
    let mut index = start;

    while let Some(level) = selector.level(index).filter(|l| l.is_visible()) {
        let labels = level.labels();
        let current = level.value();
        let default = level
            .options()
            .iter()
            .position(|o| o.value == current)
            .unwrap_or(0);
        let prompt = format!("Level {}", index + 1);

        let choice = if labels.len() > FUZZY_THRESHOLD {
            FuzzySelect::with_theme(theme)
                .with_prompt(prompt)
                .items(&labels)
                .default(default)
                .interact_opt()?
        } else {
            Select::with_theme(theme)
                .with_prompt(prompt)
                .items(&labels)
                .default(default)
                .interact_opt()?
        };

        let Some(choice) = choice else {
            return Ok(None);
        };
        let value = level
            .options()
            .get(choice)
            .map(|o| o.value.clone())
            .unwrap_or_default();

        selector.on_level_changed(index, &value)?;
        if value.is_empty() {
            break;
        }
        index += 1;
    }

    Ok(Some(selector.current_path().to_string()))
}

/// First level to prompt for: the unselected level after the current path
pub fn first_open_level(selector: &CategoryPathSelector<MemoryLevel>) -> usize {
    selector
        .levels()
        .iter()
        .position(|l| l.is_visible() && l.value().is_empty())
        .unwrap_or(0)
}
