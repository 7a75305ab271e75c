//! EventSink port - イベント記録の抽象化
//!
//! - TracingEventSink: tracing へ出力（本番用）
//! - RecordingEventSink: メモリに記録（テスト用）

use crate::domain::DomainEvent;

/// EventSink はドメインイベントを記録
///
/// 記録の失敗はジョブの結果に影響させないため、戻り値はありません。
pub trait EventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}
