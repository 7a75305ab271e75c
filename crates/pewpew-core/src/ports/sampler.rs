//! Sampler port - 乱択の抽象化
//!
//! ローテーションの抽選はこの trait 経由で行います。
//! テストでは ScriptedSampler に差し替え、呼び出し引数（母集団と件数）を検証できます。

use crate::domain::LevelId;

/// Sampler は母集団から重複なしで `count` 件を抽選
///
/// # 契約
/// - 戻り値は `population` の要素のみ
/// - 重複なし、ちょうど `count` 件（`count <= population.len()` の場合）
///
/// 呼び出し側（RotationSelector）はこの契約を検証します。
pub trait Sampler: Send + Sync {
    fn draw(&self, population: &[LevelId], count: usize) -> Vec<LevelId>;
}

impl<S: Sampler + ?Sized> Sampler for &S {
    fn draw(&self, population: &[LevelId], count: usize) -> Vec<LevelId> {
        (**self).draw(population, count)
    }
}
