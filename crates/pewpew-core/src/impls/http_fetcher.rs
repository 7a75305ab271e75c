//! HttpFetcher - reqwest による Fetcher 実装

use async_trait::async_trait;

use crate::ports::{FetchError, Fetcher};

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// ステータス付きのエラーは Status、それ以外（接続・URL・本文読み込み）は Request
fn fetch_error(url: &str, err: reqwest::Error) -> FetchError {
    match err.status() {
        Some(status) => FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        },
        None => FetchError::Request {
            url: url.to_string(),
            message: err.to_string(),
        },
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| fetch_error(url, e))?;

        let body = response.bytes().await.map_err(|e| fetch_error(url, e))?;
        Ok(body.to_vec())
    }
}
