//! Rotation state: the active selection and the bounded exclusion history.
//!
//! Both are persisted as flat text, one identifier per line.

use std::collections::VecDeque;

use serde::Serialize;

use super::ids::LevelId;

/// Number of levels in one monthly rotation.
pub const DEFAULT_SELECTION_COUNT: usize = 5;

/// Maximum length of the exclusion history.
pub const HISTORY_CAPACITY: usize = 10;

/// Recently selected levels, oldest first.
///
/// Design:
/// - `record()` appends a new selection and evicts from the front
///   until the capacity holds again.
/// - Loading does not truncate; an oversized file is trimmed on the next `record()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionHistory {
    entries: VecDeque<LevelId>,
    capacity: usize,
}

impl ExclusionHistory {
    pub fn empty(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Parse the persisted form (one id per line, oldest first, blanks ignored).
    ///
    /// A leading UTF-8 byte order mark is dropped.
    pub fn parse(text: &str, capacity: usize) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self {
            entries: text.lines().filter_map(LevelId::parse).collect(),
            capacity,
        }
    }

    pub fn from_levels(levels: impl IntoIterator<Item = LevelId>, capacity: usize) -> Self {
        Self {
            entries: levels.into_iter().collect(),
            capacity,
        }
    }

    pub fn contains(&self, level: &LevelId) -> bool {
        self.entries.contains(level)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelId> {
        self.entries.iter()
    }

    /// Append `levels` in order and return the entries evicted from the front.
    pub fn record(&mut self, levels: &[LevelId]) -> Vec<LevelId> {
        self.entries.extend(levels.iter().cloned());
        let overflow = self.entries.len().saturating_sub(self.capacity);
        self.entries.drain(..overflow).collect()
    }

    pub fn to_text(&self) -> String {
        render_lines(self.entries.iter())
    }
}

/// The levels chosen for the current rotation period, in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Vec<LevelId>);

impl Selection {
    pub fn new(levels: Vec<LevelId>) -> Self {
        Self(levels)
    }

    pub fn levels(&self) -> &[LevelId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, level: &LevelId) -> bool {
        self.0.contains(level)
    }

    pub fn to_text(&self) -> String {
        render_lines(self.0.iter())
    }
}

/// Result of one successful rotation, before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    pub selection: Selection,
    pub history: ExclusionHistory,

    /// History entries dropped to stay within capacity.
    pub evicted: Vec<LevelId>,

    /// Size of the eligible pool the selection was drawn from.
    pub pool_size: usize,
}

fn render_lines<'a>(levels: impl Iterator<Item = &'a LevelId>) -> String {
    levels.fold(String::new(), |mut out, level| {
        out.push_str(level.as_str());
        out.push('\n');
        out
    })
}
