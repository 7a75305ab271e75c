//! MonthlyRotationJob - 月次リーダーボードのレベル入れ替え
//!
//! # 流れ
//! 1. config / 候補テーブル / 除外履歴を Storage から読む
//! 2. RotationSelector で抽選
//! 3. active selection → 除外履歴 の順に上書き
//!
//! # 失敗時
//! - 入力ファイル欠落・候補不足: イベントを出して `RunOutcome::Skipped`（何も書かない）
//! - それ以外: RunFailed イベントを出して Err（成果物は実行前の状態のまま）

use tracing::error;

use crate::app::selector::RotationSelector;
use crate::domain::{
    CandidateSet, DomainEvent, ExclusionHistory, LevelConfig, Rotation, RotationError,
    RotationSettings, RunOutcome, SkipReason,
};
use crate::ports::{EventSink, Sampler, Storage, StorageError};

pub const JOB_NAME: &str = "monthly_rotation";

pub struct MonthlyRotationJob<'a, S> {
    settings: RotationSettings,
    selector: RotationSelector<S>,
    storage: &'a dyn Storage,
    events: &'a dyn EventSink,
}

impl<'a, S: Sampler> MonthlyRotationJob<'a, S> {
    pub fn new(
        settings: RotationSettings,
        sampler: S,
        storage: &'a dyn Storage,
        events: &'a dyn EventSink,
    ) -> Self {
        let selector = RotationSelector::new(sampler, settings.count);
        Self {
            settings,
            selector,
            storage,
            events,
        }
    }

    pub fn run(&self) -> Result<RunOutcome, RotationError> {
        match self.rotate() {
            Ok(rotation) => {
                self.events.emit(DomainEvent::LevelsSelected {
                    levels: rotation.selection.levels().to_vec(),
                    evicted: rotation.evicted.clone(),
                });
                Ok(RunOutcome::Rotated(rotation))
            }
            Err(err) => match SkipReason::from_error(&err) {
                Some(reason) => {
                    self.events.emit(DomainEvent::RotationSkipped {
                        reason: reason.clone(),
                    });
                    Ok(RunOutcome::Skipped(reason))
                }
                None => {
                    self.events.emit(DomainEvent::RunFailed {
                        job: JOB_NAME,
                        error: err.to_string(),
                    });
                    Err(err)
                }
            },
        }
    }

    fn rotate(&self) -> Result<Rotation, RotationError> {
        let config = LevelConfig::parse(
            &self.settings.config_key,
            &self.read_required(&self.settings.config_key)?,
        )?;
        let candidates = CandidateSet::from_table(&self.read_required_text(&self.settings.candidates_key)?);
        let history = self.load_history()?;
        let always_excluded = config.always_excluded();

        self.events.emit(DomainEvent::CandidatesLoaded {
            candidates: candidates.len(),
            always_excluded: always_excluded.len(),
            history: history.len(),
        });

        let rotation = self.selector.rotate(&candidates, &always_excluded, history)?;
        self.persist(&rotation)?;
        Ok(rotation)
    }

    /// 履歴ファイルが無い場合は空の履歴から始める
    fn load_history(&self) -> Result<ExclusionHistory, RotationError> {
        match self.storage.read_text(&self.settings.history_key) {
            Ok(text) => Ok(ExclusionHistory::parse(&text, self.settings.history_capacity)),
            Err(StorageError::NotFound { .. }) => {
                Ok(ExclusionHistory::empty(self.settings.history_capacity))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// active selection → 履歴の順に上書き
    ///
    /// 履歴の書き込みに失敗したら active selection を元に戻す（2 つの成果物は常に揃っている）
    fn persist(&self, rotation: &Rotation) -> Result<(), RotationError> {
        let active_key = &self.settings.active_key;
        let previous = self.storage.read_optional(active_key)?;

        self.storage
            .write(active_key, rotation.selection.to_text().as_bytes())?;

        if let Err(err) = self
            .storage
            .write(&self.settings.history_key, rotation.history.to_text().as_bytes())
        {
            let restored = match &previous {
                Some(bytes) => self.storage.write(active_key, bytes),
                None => self.storage.remove(active_key),
            };
            if let Err(restore_err) = restored {
                error!(key = %active_key, error = %restore_err, "failed to restore active selection");
            }
            return Err(err.into());
        }
        Ok(())
    }

    fn read_required(&self, key: &str) -> Result<Vec<u8>, RotationError> {
        self.storage.read(key).map_err(missing_input)
    }

    fn read_required_text(&self, key: &str) -> Result<String, RotationError> {
        self.storage.read_text(key).map_err(missing_input)
    }
}

fn missing_input(err: StorageError) -> RotationError {
    match err {
        StorageError::NotFound { key } => RotationError::MissingInput { key },
        other => other.into(),
    }
}
