//! ScriptedSampler - テスト用 Sampler
//!
//! 呼び出し（母集団・件数）を記録し、あらかじめ決めた結果を返します。

use std::sync::Mutex;

use crate::domain::LevelId;
use crate::ports::Sampler;

/// 記録された draw 呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub population: Vec<LevelId>,
    pub count: usize,
}

#[derive(Debug, Clone)]
enum Script {
    /// 母集団に関係なく固定の結果
    Fixed(Vec<LevelId>),
    /// 母集団の先頭 `count` 件
    FirstN,
}

#[derive(Debug)]
pub struct ScriptedSampler {
    script: Script,
    calls: Mutex<Vec<DrawCall>>,
}

impl ScriptedSampler {
    pub fn returning(levels: Vec<LevelId>) -> Self {
        Self::with_script(Script::Fixed(levels))
    }

    pub fn first_n() -> Self {
        Self::with_script(Script::FirstN)
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Sampler for ScriptedSampler {
    fn draw(&self, population: &[LevelId], count: usize) -> Vec<LevelId> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(DrawCall {
                population: population.to_vec(),
                count,
            });
        match &self.script {
            Script::Fixed(levels) => levels.clone(),
            Script::FirstN => population.iter().take(count).cloned().collect(),
        }
    }
}
