//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! ジョブは乱数・ファイル・時刻・HTTP・ログに直接触れず、
//! 各 trait 経由で外部とやり取りします。

pub mod clock;
pub mod event_sink;
pub mod fetcher;
pub mod sampler;
pub mod storage;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::fetcher::{FetchError, Fetcher};
pub use self::sampler::Sampler;
pub use self::storage::{Storage, StorageError};
