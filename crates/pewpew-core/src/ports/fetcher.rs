//! Fetcher port - リモートからのダウンロード
//!
//! # 実装
//! - **HttpFetcher**: reqwest（本番用）
//! - **StaticFetcher**: URL → 固定レスポンス（テスト用）

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 成功ステータスのレスポンス本文をそのまま返す
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
