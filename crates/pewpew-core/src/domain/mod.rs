//! Domain model (level ids, rotation state, config, events, outcomes).

pub mod candidates;
pub mod config;
pub mod errors;
pub mod events;
pub mod ids;
pub mod outcome;
pub mod rotation;
pub mod snapshot;

pub use self::candidates::CandidateSet;
pub use self::config::{ConfigError, LevelConfig, RotationSettings};
pub use self::errors::{JobError, RotationError};
pub use self::events::DomainEvent;
pub use self::ids::LevelId;
pub use self::outcome::{RunOutcome, SkipReason};
pub use self::rotation::{
    DEFAULT_SELECTION_COUNT, ExclusionHistory, HISTORY_CAPACITY, Rotation, Selection,
};
pub use self::snapshot::SnapshotMetadata;
