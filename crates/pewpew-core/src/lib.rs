//! pewpew-core
//!
//! PewPew World のデータ保守ジョブ（月次レベルローテーション、スナップショット取得、定期レポート）。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（LevelId, CandidateSet, ExclusionHistory, Selection, events, errors）
//! - **ports**: 抽象化レイヤー（Sampler, Storage, Clock, Fetcher, EventSink）
//! - **impls**: ports の実装（FsStorage, RandomSampler, HttpFetcher など）
//! - **app**: ジョブ（MonthlyRotationJob, LevelDataFetchJob, TwoDayReportJob）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
