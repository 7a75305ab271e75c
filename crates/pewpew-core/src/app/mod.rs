//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせて保守ジョブを実装します。
//!
//! # 主要コンポーネント
//! - **RotationSelector**: 月次ローテーションの抽選ルール
//! - **MonthlyRotationJob**: 入力の読み込み・抽選・永続化
//! - **LevelDataFetchJob**: CSV スナップショットの取得
//! - **TwoDayReportJob**: プレースホルダーレポートの出力

pub mod level_data_fetch;
pub mod monthly_rotation;
pub mod selector;
pub mod two_day_report;

// 主要な型を再エクスポート
pub use self::level_data_fetch::LevelDataFetchJob;
pub use self::monthly_rotation::MonthlyRotationJob;
pub use self::selector::RotationSelector;
pub use self::two_day_report::TwoDayReportJob;
