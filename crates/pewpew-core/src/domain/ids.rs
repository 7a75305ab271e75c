//! Domain identifiers.
//!
//! # LevelId
//! レベルの UUID をそのまま保持する不透明な識別子です。
//! 中身の形式（UUID かどうか）は検証しません。比較は文字列の完全一致です。

use serde::{Deserialize, Serialize};
use std::fmt;

/// LevelId はゲームのレベルを指す識別子
///
/// # 不変条件
/// - 前後の空白は取り除かれている
/// - 空文字列ではない
///
/// `parse()` を通すことでこの条件が保証されます。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(String);

impl LevelId {
    /// 生の文字列から LevelId を作成（空白のみなら None）
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LevelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// テスト用: 検証済みの前提で &str から作成
impl From<&str> for LevelId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("lvl1", "lvl1")]
    #[case::padded("  lvl1\t", "lvl1")]
    #[case::carriage_return("lvl1\r", "lvl1")]
    fn parse_trims_whitespace(#[case] raw: &str, #[case] expected: &str) {
        let id = LevelId::parse(raw).unwrap();
        assert_eq!(id.as_str(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn parse_rejects_blank(#[case] raw: &str) {
        assert!(LevelId::parse(raw).is_none());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = LevelId::from("6b1f0c2e");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6b1f0c2e\"");
    }
}
