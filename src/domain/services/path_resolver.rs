//! Path Resolver
//!
//! Turns a dotted category path into the chain of categories it selects,
//! one entry per selector level. Resolution never mutates anything, so the
//! selector can validate a whole path before touching its handles.

use log::trace;

use crate::domain::entities::{resolve_category, Category};
use crate::domain::value_objects::PathStyle;
use crate::error::{CatpathError, CatpathResult};

/// The selection made at one selector level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLevel<'a> {
    /// Candidates offered at this level
    pub siblings: &'a [Category],
    /// The chosen candidate
    pub category: &'a Category,
    /// Path prefix through this level (the level's selected value)
    pub value: String,
}

/// A fully resolved path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    roots: &'a [Category],
    levels: Vec<ResolvedLevel<'a>>,
}

impl<'a> Resolution<'a> {
    pub fn levels(&self) -> &[ResolvedLevel<'a>] {
        &self.levels
    }

    /// Number of selector levels with a selection
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// The category the path points at, `None` for the empty path
    pub fn deepest(&self) -> Option<&'a Category> {
        self.levels.last().map(|l| l.category)
    }

    /// Candidates for the level after the deepest selection
    pub fn next_siblings(&self) -> &'a [Category] {
        match self.deepest() {
            Some(category) => &category.sub_categories,
            None => self.roots,
        }
    }

    /// The path this resolution selects
    pub fn path(&self) -> &str {
        self.levels.last().map(|l| l.value.as_str()).unwrap_or("")
    }
}

/// Resolve `path` against `roots`.
///
/// The empty path resolves to zero levels. Otherwise every step must match a
/// sibling; when none does, resolution fails with `InvalidPath`, naming the
/// dot-separated segment and its zero-based position.
///
/// In `Relative` style a sibling name may span several segments. Longer names
/// are tried first and a dead end backtracks to the next shorter candidate, so
/// `a` > `b.c` still resolves when a sibling `a.b` exists. On failure the
/// reported position is the deepest segment no candidate got past.
pub fn resolve_path<'a>(
    roots: &'a [Category],
    path: &str,
    style: PathStyle,
) -> CatpathResult<Resolution<'a>> {
    if path.is_empty() {
        return Ok(Resolution {
            roots,
            levels: Vec::new(),
        });
    }

    let segments: Vec<&str> = path.split(PathStyle::SEPARATOR).collect();
    let chain = match style {
        PathStyle::Qualified => match_qualified(roots, &segments),
        PathStyle::Relative => {
            let mut chain = Vec::new();
            let mut furthest = 0;
            if match_relative(roots, &segments, 0, &mut chain, &mut furthest) {
                Ok(chain)
            } else {
                Err(furthest)
            }
        }
    };

    let chain = chain.map_err(|pos| {
        trace!("no category for segment {} of '{}'", pos, path);
        CatpathError::InvalidPath {
            segment: segments[pos].to_string(),
            position: pos,
        }
    })?;

    let mut levels: Vec<ResolvedLevel<'a>> = Vec::with_capacity(chain.len());
    for (siblings, category) in chain {
        let parent_value = levels.last().map(|l| l.value.as_str()).unwrap_or("");
        let value = style.child_path(parent_value, &category.name);
        levels.push(ResolvedLevel {
            siblings,
            category,
            value,
        });
    }

    Ok(Resolution { roots, levels })
}

type Step<'a> = (&'a [Category], &'a Category);

/// One level per segment; level `i` matches the prefix through segment `i`
fn match_qualified<'a>(roots: &'a [Category], segments: &[&str]) -> Result<Vec<Step<'a>>, usize> {
    let mut chain = Vec::with_capacity(segments.len());
    let mut siblings = roots;
    for pos in 0..segments.len() {
        let prefix = segments[..=pos].join(".");
        let category = resolve_category(siblings, &prefix).ok_or(pos)?;
        chain.push((siblings, category));
        siblings = &category.sub_categories;
    }
    Ok(chain)
}

/// Depth-first match of `segments[pos..]`, longest sibling name first
fn match_relative<'a>(
    siblings: &'a [Category],
    segments: &[&str],
    pos: usize,
    chain: &mut Vec<Step<'a>>,
    furthest: &mut usize,
) -> bool {
    if pos == segments.len() {
        return true;
    }

    for take in (1..=segments.len() - pos).rev() {
        let candidate = segments[pos..pos + take].join(".");
        let Some(category) = resolve_category(siblings, &candidate) else {
            continue;
        };
        chain.push((siblings, category));
        if match_relative(&category.sub_categories, segments, pos + take, chain, furthest) {
            return true;
        }
        chain.pop();
    }

    *furthest = (*furthest).max(pos);
    false
}
