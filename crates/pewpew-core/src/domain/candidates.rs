//! Candidate levels loaded from the level snapshot table.

use std::borrow::Cow;
use std::collections::HashSet;

use super::ids::LevelId;

/// The universe of levels a rotation may draw from.
///
/// Source order is kept (first occurrence wins on duplicates) so the
/// population handed to a sampler is deterministic for a given table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    levels: Vec<LevelId>,
}

impl CandidateSet {
    /// Build from a CSV-like table: header on line 1, identifier in the first column.
    ///
    /// Blank rows and rows with an empty first column are ignored.
    pub fn from_table(text: &str) -> Self {
        Self::from_levels(
            text.lines()
                .skip(1)
                .filter_map(|line| LevelId::parse(&first_column(line))),
        )
    }

    pub fn from_levels(levels: impl IntoIterator<Item = LevelId>) -> Self {
        let mut seen = HashSet::new();
        let levels = levels
            .into_iter()
            .filter(|level| seen.insert(level.clone()))
            .collect();
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelId> {
        self.levels.iter()
    }

    pub fn as_slice(&self) -> &[LevelId] {
        &self.levels
    }
}

fn first_column(line: &str) -> Cow<'_, str> {
    let line = line.trim_start();
    let Some(quoted) = line.strip_prefix('"') else {
        return Cow::Borrowed(line.split(',').next().unwrap_or_default());
    };

    // 引用符内の "" は " 1 文字、単独の " で値が終わる
    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '"' {
            value.push(c);
        } else if chars.next_if_eq(&'"').is_some() {
            value.push('"');
        } else {
            break;
        }
    }
    Cow::Owned(value)
}
