//! Outcome of a maintenance run.

use std::fmt;

use serde::Serialize;

use super::errors::RotationError;
use super::rotation::Rotation;

/// Why a rotation run was skipped without touching persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    MissingInput { key: String },
    InsufficientCandidates { available: usize, required: usize },
}

impl SkipReason {
    /// Map a recoverable error to a skip reason; `None` for hard failures.
    pub fn from_error(err: &RotationError) -> Option<Self> {
        match err {
            RotationError::MissingInput { key } => Some(SkipReason::MissingInput { key: key.clone() }),
            RotationError::InsufficientCandidates {
                available,
                required,
            } => Some(SkipReason::InsufficientCandidates {
                available: *available,
                required: *required,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingInput { key } => write!(f, "missing input {key}"),
            SkipReason::InsufficientCandidates {
                available,
                required,
            } => write!(
                f,
                "only {available} eligible levels, {required} required"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both artifacts were overwritten.
    Rotated(Rotation),

    /// Nothing was written.
    Skipped(SkipReason),
}

impl RunOutcome {
    pub fn is_rotated(&self) -> bool {
        matches!(self, RunOutcome::Rotated(_))
    }
}
