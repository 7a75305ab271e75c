//! TwoDayReportJob - 2 日ごとのプレースホルダーレポート

use chrono::{DateTime, Utc};

use crate::domain::DomainEvent;
use crate::ports::{Clock, EventSink, Storage, StorageError};

pub const REPORT_KEY: &str = "two_day_output.txt";

pub struct TwoDayReportJob<'a> {
    storage: &'a dyn Storage,
    clock: &'a dyn Clock,
    events: &'a dyn EventSink,
}

impl<'a> TwoDayReportJob<'a> {
    pub fn new(storage: &'a dyn Storage, clock: &'a dyn Clock, events: &'a dyn EventSink) -> Self {
        Self {
            storage,
            clock,
            events,
        }
    }

    /// レポートを上書きし、書いた内容を返す
    pub fn run(&self) -> Result<String, StorageError> {
        let report = render_report(self.clock.now());
        self.storage.write(REPORT_KEY, report.as_bytes())?;
        self.events.emit(DomainEvent::ReportWritten {
            key: REPORT_KEY.to_string(),
        });
        Ok(report)
    }
}

pub fn render_report(ran_at: DateTime<Utc>) -> String {
    format!(
        "Two-day task ran at {}\nProcessed some data...\n",
        ran_at.format("%Y-%m-%d %H:%M:%S%.6f")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{InMemoryStorage, RecordingEventSink};
    use crate::ports::FixedClock;
    use chrono::TimeZone;

    #[test]
    fn report_carries_clock_time() {
        let storage = InMemoryStorage::new();
        let events = RecordingEventSink::new();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 5, 6, 7, 8).unwrap());
        let job = TwoDayReportJob::new(&storage, &clock, &events);

        job.run().unwrap();

        assert_eq!(
            storage.get_text(REPORT_KEY).as_deref(),
            Some("Two-day task ran at 2024-03-05 06:07:08.000000\nProcessed some data...\n")
        );
        assert_eq!(
            events.events(),
            vec![DomainEvent::ReportWritten {
                key: REPORT_KEY.to_string()
            }]
        );
    }

    #[test]
    fn rerun_overwrites_previous_report() {
        let storage = InMemoryStorage::new().with_file(REPORT_KEY, "stale\nstale\nstale\n");
        let events = RecordingEventSink::new();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap());

        let report = TwoDayReportJob::new(&storage, &clock, &events).run().unwrap();

        assert_eq!(storage.get_text(REPORT_KEY), Some(report));
    }
}
