//! LevelDataFetchJob - リモートの CSV スナップショットを取得
//!
//! 3 つの CSV をすべて取得してから書き込みます。1 つでも失敗したら何も書きません。
//! 最後に `metadata.json`（取得時刻）を書きます。

use crate::domain::snapshot::{METADATA_FILE, SNAPSHOT_FILES, snapshot_key};
use crate::domain::{DomainEvent, JobError, SnapshotMetadata};
use crate::ports::{Clock, EventSink, Fetcher, Storage};

pub const JOB_NAME: &str = "level_data_fetch";

pub struct LevelDataFetchJob<'a> {
    base_url: String,
    fetcher: &'a dyn Fetcher,
    storage: &'a dyn Storage,
    clock: &'a dyn Clock,
    events: &'a dyn EventSink,
}

impl<'a> LevelDataFetchJob<'a> {
    pub fn new(
        base_url: impl Into<String>,
        fetcher: &'a dyn Fetcher,
        storage: &'a dyn Storage,
        clock: &'a dyn Clock,
        events: &'a dyn EventSink,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
            storage,
            clock,
            events,
        }
    }

    pub fn url_for(&self, file: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file)
    }

    pub async fn run(&self) -> Result<SnapshotMetadata, JobError> {
        let result = self.fetch_all().await;
        if let Err(err) = &result {
            self.events.emit(DomainEvent::RunFailed {
                job: JOB_NAME,
                error: err.to_string(),
            });
        }
        result
    }

    async fn fetch_all(&self) -> Result<SnapshotMetadata, JobError> {
        let mut bodies = Vec::with_capacity(SNAPSHOT_FILES.len());
        for file in SNAPSHOT_FILES {
            let body = self.fetcher.fetch(&self.url_for(file)).await?;
            bodies.push((file, body));
        }

        for (file, body) in &bodies {
            self.storage.write(&snapshot_key(file), body)?;
            self.events.emit(DomainEvent::SnapshotFetched {
                file: file.to_string(),
                bytes: body.len(),
            });
        }

        let metadata = SnapshotMetadata::at(self.clock.now());
        let encoded = serde_json::to_vec(&metadata)?;
        self.storage.write(&snapshot_key(METADATA_FILE), &encoded)?;
        self.events.emit(DomainEvent::MetadataWritten {
            timestamp: metadata.timestamp,
        });

        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{InMemoryStorage, RecordingEventSink, StaticFetcher};
    use crate::ports::FixedClock;
    use chrono::{TimeZone, Utc};

    const BASE: &str = "https://data.example.test/pewpew";

    fn csv_fixtures() -> [(&'static str, &'static str); 3] {
        [
            ("account_data.csv", "account_id,name\n1,TestUser\n2,AnotherUser"),
            ("level_data.csv", "level_id,name\n1,Easy\n2,Hard"),
            ("score_data.csv", "score_id,value\n1,100\n2,200"),
        ]
    }

    fn full_fetcher() -> StaticFetcher {
        csv_fixtures()
            .into_iter()
            .fold(StaticFetcher::new(), |fetcher, (file, body)| {
                fetcher.with_response(&format!("{BASE}/{file}"), body)
            })
    }

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn writes_csv_files_verbatim() {
        let fetcher = full_fetcher();
        let storage = InMemoryStorage::new();
        let events = RecordingEventSink::new();
        let clock = clock();
        let job = LevelDataFetchJob::new(BASE, &fetcher, &storage, &clock, &events);

        job.run().await.unwrap();

        for (file, body) in csv_fixtures() {
            let key = format!("data/github_data/{file}");
            assert_eq!(storage.get_text(&key).as_deref(), Some(body), "{file} content mismatch");
        }
    }

    #[tokio::test]
    async fn metadata_has_only_a_float_timestamp() {
        let fetcher = full_fetcher();
        let storage = InMemoryStorage::new();
        let events = RecordingEventSink::new();
        let clock = clock();
        let job = LevelDataFetchJob::new(BASE, &fetcher, &storage, &clock, &events);

        let metadata = job.run().await.unwrap();

        let raw = storage.get("data/github_data/metadata.json").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["timestamp"]);
        assert!(object["timestamp"].is_f64());
        assert_eq!(object["timestamp"].as_f64(), Some(metadata.timestamp));
        assert_eq!(metadata.timestamp, 1_704_110_400.0);
    }

    #[tokio::test]
    async fn failed_download_writes_nothing() {
        let fetcher = StaticFetcher::new()
            .with_response(&format!("{BASE}/account_data.csv"), "account_id,name\n");
        let storage = InMemoryStorage::new();
        let events = RecordingEventSink::new();
        let clock = clock();
        let job = LevelDataFetchJob::new(BASE, &fetcher, &storage, &clock, &events);

        let err = job.run().await.unwrap_err();

        assert!(matches!(err, JobError::Fetch(_)));
        assert!(storage.snapshot().is_empty());
        assert!(matches!(
            events.events().last(),
            Some(DomainEvent::RunFailed { job: JOB_NAME, .. })
        ));
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let fetcher = full_fetcher();
        let storage = InMemoryStorage::new();
        let events = RecordingEventSink::new();
        let clock = clock();
        let base = format!("{BASE}/");
        let job = LevelDataFetchJob::new(base, &fetcher, &storage, &clock, &events);

        job.run().await.unwrap();

        assert_eq!(
            fetcher.requested(),
            vec![
                format!("{BASE}/account_data.csv"),
                format!("{BASE}/level_data.csv"),
                format!("{BASE}/score_data.csv"),
            ]
        );
    }
}
