//! TracingEventSink - DomainEvent を tracing に流す

use tracing::{error, info, warn};

use crate::domain::DomainEvent;
use crate::ports::EventSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: DomainEvent) {
        match event {
            DomainEvent::CandidatesLoaded {
                candidates,
                always_excluded,
                history,
            } => info!(candidates, always_excluded, history, "loaded rotation inputs"),
            DomainEvent::LevelsSelected { levels, evicted } => info!(
                outcome = "success",
                levels = ?levels,
                evicted = ?evicted,
                "selected levels for the monthly rotation"
            ),
            DomainEvent::RotationSkipped { reason } => {
                warn!(reason = %reason, "skipping monthly rotation")
            }
            DomainEvent::RunFailed { job, error } => error!(job, %error, "maintenance job failed"),
            DomainEvent::SnapshotFetched { file, bytes } => {
                info!(file = %file, bytes, "downloaded snapshot")
            }
            DomainEvent::MetadataWritten { timestamp } => {
                info!(outcome = "success", timestamp, "snapshot metadata written")
            }
            DomainEvent::ReportWritten { key } => {
                info!(outcome = "success", key = %key, "two-day task completed")
            }
        }
    }
}
