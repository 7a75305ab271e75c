//! RotationSelector - 月次ローテーションの抽選ルール
//!
//! 1. 候補プール P = C − S − E（C の順序を維持）
//! 2. |P| < K なら InsufficientCandidates
//! 3. Sampler で P から K 件を抽選し、契約を検証
//! 4. E に抽選結果を追記し、容量を超えた分を先頭から捨てる
//!
//! 永続化は行いません（MonthlyRotationJob の責務）。

use std::collections::HashSet;

use crate::domain::{CandidateSet, ExclusionHistory, LevelId, Rotation, RotationError, Selection};
use crate::ports::Sampler;

pub struct RotationSelector<S> {
    sampler: S,
    count: usize,
}

impl<S: Sampler> RotationSelector<S> {
    pub fn new(sampler: S, count: usize) -> Self {
        Self { sampler, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Candidates that are neither always excluded nor in the recent history.
    pub fn eligible_pool(
        candidates: &CandidateSet,
        always_excluded: &HashSet<LevelId>,
        history: &ExclusionHistory,
    ) -> Vec<LevelId> {
        candidates
            .iter()
            .filter(|level| !always_excluded.contains(*level) && !history.contains(level))
            .cloned()
            .collect()
    }

    /// Draw `count` levels from `pool`.
    pub fn select(&self, pool: &[LevelId]) -> Result<Selection, RotationError> {
        if pool.len() < self.count {
            return Err(RotationError::InsufficientCandidates {
                available: pool.len(),
                required: self.count,
            });
        }

        let drawn = self.sampler.draw(pool, self.count);
        verify_draw(pool, &drawn, self.count)?;
        Ok(Selection::new(drawn))
    }

    /// Select a new rotation and fold it into `history`.
    pub fn rotate(
        &self,
        candidates: &CandidateSet,
        always_excluded: &HashSet<LevelId>,
        mut history: ExclusionHistory,
    ) -> Result<Rotation, RotationError> {
        let pool = Self::eligible_pool(candidates, always_excluded, &history);
        let selection = self.select(&pool)?;
        let evicted = history.record(selection.levels());

        Ok(Rotation {
            selection,
            history,
            evicted,
            pool_size: pool.len(),
        })
    }
}

fn verify_draw(pool: &[LevelId], drawn: &[LevelId], count: usize) -> Result<(), RotationError> {
    if drawn.len() != count {
        return Err(RotationError::InvalidDraw(format!(
            "expected {count} levels, got {}",
            drawn.len()
        )));
    }

    let mut seen = HashSet::with_capacity(drawn.len());
    for level in drawn {
        if !pool.contains(level) {
            return Err(RotationError::InvalidDraw(format!(
                "{level} is not in the eligible pool"
            )));
        }
        if !seen.insert(level) {
            return Err(RotationError::InvalidDraw(format!("{level} drawn twice")));
        }
    }
    Ok(())
}
