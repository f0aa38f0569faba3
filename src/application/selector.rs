//! Category Path Selector
//!
//! Keeps a row of selector levels in sync with a dotted category path.
//! Level `i` offers the siblings at depth `i` and holds the path prefix
//! through that depth; one extra, unselected level offers the children of
//! the deepest selection; every level below that is hidden.

use log::debug;

use crate::domain::entities::{Category, CategoryTree};
use crate::domain::ports::SelectorLevel;
use crate::domain::services::resolve_path;
use crate::domain::value_objects::{PathStyle, SelectOption};
use crate::error::{CatpathError, CatpathResult};

/// Placeholder label used for the unselected option
pub const DEFAULT_PLACEHOLDER: &str = "---";

/// Number of selector levels bound by the bundled hosts
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Upper bound on selector levels accepted from flags, config and env
pub const MAX_SELECTOR_LEVELS: usize = 64;

/// Behavior switches for a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOptions {
    pub style: PathStyle,
    /// Label of the leading "nothing selected" option
    pub placeholder: String,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            style: PathStyle::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// What one selector level should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelState {
    /// Visible with these options and this selected value (empty = unselected)
    Shown {
        options: Vec<SelectOption>,
        value: String,
    },
    /// Hidden and cleared
    Hidden,
}

impl LevelState {
    pub fn is_shown(&self) -> bool {
        matches!(self, LevelState::Shown { .. })
    }

    /// Selected value, empty for hidden or unselected levels
    pub fn value(&self) -> &str {
        match self {
            LevelState::Shown { value, .. } => value,
            LevelState::Hidden => "",
        }
    }
}

type Listener = Box<dyn FnMut(&str)>;

/// Cascading selector over a category tree.
///
/// Listeners registered with [`on_selection_changed`](Self::on_selection_changed)
/// run after the levels are updated and only when the committed path changes.
/// A listener cannot call back into the selector while it runs; hosts that
/// want to redirect a selection record the request and apply it with
/// [`set_path`](Self::set_path) once the current call returns. Because
/// notification is skipped for unchanged paths, such loops settle.
pub struct CategoryPathSelector<L: SelectorLevel> {
    tree: CategoryTree,
    levels: Vec<L>,
    options: SelectorOptions,
    current_path: String,
    listeners: Vec<Listener>,
}

impl<L: SelectorLevel> CategoryPathSelector<L> {
    /// Bind `levels` to `tree` and apply `initial_path`.
    ///
    /// The number of handles is the maximum depth the selector can show.
    pub fn new(
        tree: CategoryTree,
        levels: Vec<L>,
        options: SelectorOptions,
        initial_path: &str,
    ) -> CatpathResult<Self> {
        if levels.is_empty() {
            return Err(CatpathError::NoLevels);
        }

        let mut selector = Self {
            tree,
            levels,
            options,
            current_path: String::new(),
            listeners: Vec::new(),
        };
        selector.set_path(initial_path)?;
        Ok(selector)
    }

    /// Register a change listener
    pub fn on_selection_changed(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Select `path`, re-rendering every level.
    ///
    /// Returns whether the committed path changed. On error no level and no
    /// state is modified.
    pub fn set_path(&mut self, path: &str) -> CatpathResult<bool> {
        let plan = self.plan(path)?;

        for (level, state) in self.levels.iter_mut().zip(plan) {
            match state {
                LevelState::Shown { options, value } => {
                    level.set_options(options);
                    level.set_value(&value);
                    level.set_visible(true);
                }
                LevelState::Hidden => {
                    level.set_options(Vec::new());
                    level.set_value("");
                    level.set_visible(false);
                }
            }
        }

        if self.current_path == path {
            return Ok(false);
        }

        debug!("category path '{}' -> '{}'", self.current_path, path);
        self.current_path = path.to_string();
        for listener in &mut self.listeners {
            listener(path);
        }
        Ok(true)
    }

    /// React to the user picking `selected_value` at `level_index`.
    ///
    /// Clearing a level other than the first falls back to the selection held
    /// by the level above it.
    pub fn on_level_changed(
        &mut self,
        level_index: usize,
        selected_value: &str,
    ) -> CatpathResult<bool> {
        if level_index >= self.levels.len() {
            return Err(CatpathError::LevelOutOfRange {
                index: level_index,
                max_depth: self.levels.len(),
            });
        }

        let path = if selected_value.is_empty() && level_index > 0 {
            self.levels[level_index - 1].value()
        } else {
            selected_value.to_string()
        };
        self.set_path(&path)
    }

    /// Compute the level states for `path` without applying them
    pub fn plan(&self, path: &str) -> CatpathResult<Vec<LevelState>> {
        plan_levels(&self.tree, path, &self.options, self.levels.len())
    }

    /// The last successfully applied path
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Path read back from the level handles: the deepest non-empty value
    pub fn composed_path(&self) -> String {
        self.levels
            .iter()
            .map(|l| l.value())
            .filter(|v| !v.is_empty())
            .last()
            .unwrap_or_default()
    }

    pub fn levels(&self) -> &[L] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&L> {
        self.levels.get(index)
    }

    pub fn max_depth(&self) -> usize {
        self.levels.len()
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    pub fn options(&self) -> &SelectorOptions {
        &self.options
    }

    /// Release the level handles
    pub fn into_levels(self) -> Vec<L> {
        self.levels
    }
}

/// Level states for `path` over `max_depth` levels
pub fn plan_levels(
    tree: &CategoryTree,
    path: &str,
    options: &SelectorOptions,
    max_depth: usize,
) -> CatpathResult<Vec<LevelState>> {
    let resolution = resolve_path(tree.roots(), path, options.style)?;
    let depth = resolution.depth();
    if depth > max_depth {
        return Err(CatpathError::PathTooDeep { depth, max_depth });
    }

    let mut plan = Vec::with_capacity(max_depth);
    let mut parent_path = "";
    for level in resolution.levels() {
        plan.push(LevelState::Shown {
            options: level_options(level.siblings, parent_path, options),
            value: level.value.clone(),
        });
        parent_path = &level.value;
    }

    if depth < max_depth {
        let siblings = resolution.next_siblings();
        if siblings.is_empty() {
            plan.push(LevelState::Hidden);
        } else {
            plan.push(LevelState::Shown {
                options: level_options(siblings, resolution.path(), options),
                value: String::new(),
            });
        }
    }

    plan.resize(max_depth, LevelState::Hidden);
    Ok(plan)
}

fn level_options(
    siblings: &[Category],
    parent_path: &str,
    options: &SelectorOptions,
) -> Vec<SelectOption> {
    let mut out = Vec::with_capacity(siblings.len() + 1);
    out.push(SelectOption::placeholder(options.placeholder.as_str()));
    for category in siblings {
        out.push(SelectOption::new(
            options.style.child_path(parent_path, &category.name),
            category.label(),
        ));
    }
    out
}
