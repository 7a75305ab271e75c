//! RandomSampler - thread RNG による一様抽選

use rand::seq::SliceRandom;

use crate::domain::LevelId;
use crate::ports::Sampler;

/// 本番用 Sampler（シード固定なし）
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl Sampler for RandomSampler {
    fn draw(&self, population: &[LevelId], count: usize) -> Vec<LevelId> {
        let mut rng = rand::thread_rng();
        population
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }
}
