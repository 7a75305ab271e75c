//! Impls - ports の実装
//!
//! # 本番用
//! - **FsStorage**: data ディレクトリ上のファイル
//! - **RandomSampler**: thread RNG による抽選
//! - **HttpFetcher**: reqwest
//! - **TracingEventSink**: tracing へのログ出力
//!
//! # 開発・テスト用
//! - **InMemoryStorage**, **ScriptedSampler**, **StaticFetcher**, **RecordingEventSink**

pub mod fs_storage;
pub mod http_fetcher;
pub mod inmem_storage;
pub mod random_sampler;
pub mod recording_sink;
pub mod scripted_sampler;
pub mod static_fetcher;
pub mod tracing_sink;

// 主要な型を再エクスポート
pub use self::fs_storage::FsStorage;
pub use self::http_fetcher::HttpFetcher;
pub use self::inmem_storage::InMemoryStorage;
pub use self::random_sampler::RandomSampler;
pub use self::recording_sink::RecordingEventSink;
pub use self::scripted_sampler::{DrawCall, ScriptedSampler};
pub use self::static_fetcher::StaticFetcher;
pub use self::tracing_sink::TracingEventSink;
