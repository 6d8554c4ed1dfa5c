//! REST client for the memo service.
//!
//! Every operation is a single HTTP request; failures of any kind are
//! reported as [`Error::Transport`] carrying a readable message.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::normalize_base_url;
use crate::error::{Error, Result};
use crate::models::{Memo, MemoDraft, MemoId};
use crate::util::compact_text;

/// Operations offered by the memo service.
#[async_trait]
pub trait MemoApi: Send + Sync {
    /// List all memos
    async fn list(&self) -> Result<Vec<Memo>>;

    /// Fetch a single memo
    async fn get(&self, id: &MemoId) -> Result<Memo>;

    /// Create a memo; the returned id and timestamp are authoritative
    async fn create(&self, draft: &MemoDraft) -> Result<Memo>;

    /// Replace a memo's title and content
    async fn update(&self, id: &MemoId, draft: &MemoDraft) -> Result<Memo>;

    async fn delete(&self, id: &MemoId) -> Result<()>;

    /// Raw health payload of the service
    async fn health(&self) -> Result<serde_json::Value>;
}

/// HTTP implementation of [`MemoApi`].
#[derive(Debug, Clone)]
pub struct HttpMemoApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpMemoApi {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| {
                Error::Transport(format!("Failed to construct HTTP client: {error}"))
            })?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn memos_url(&self) -> String {
        format!("{}/memos", self.base_url)
    }

    fn memo_url(&self, id: &MemoId) -> String {
        format!(
            "{}/memos/{}",
            self.base_url,
            urlencoding::encode(&id.to_string())
        )
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| Error::Transport(format!("{action} request failed: {error}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let body = compact_text(&body);
            return Err(Error::Transport(if body.is_empty() {
                format!("{action} request failed with HTTP {status}")
            } else {
                format!("{action} request failed with HTTP {status}: {body}")
            }));
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
    ) -> Result<T> {
        self.send(request, action)
            .await?
            .json::<T>()
            .await
            .map_err(|error| {
                Error::Transport(format!("Failed to parse {action} response: {error}"))
            })
    }
}

#[async_trait]
impl MemoApi for HttpMemoApi {
    async fn list(&self) -> Result<Vec<Memo>> {
        tracing::debug!("GET {}", self.memos_url());
        self.send_json(self.client.get(self.memos_url()), "List memos")
            .await
    }

    async fn get(&self, id: &MemoId) -> Result<Memo> {
        tracing::debug!("GET {}", self.memo_url(id));
        self.send_json(self.client.get(self.memo_url(id)), "Get memo")
            .await
    }

    async fn create(&self, draft: &MemoDraft) -> Result<Memo> {
        tracing::debug!("POST {}", self.memos_url());
        self.send_json(self.client.post(self.memos_url()).json(draft), "Create memo")
            .await
    }

    async fn update(&self, id: &MemoId, draft: &MemoDraft) -> Result<Memo> {
        tracing::debug!("PUT {}", self.memo_url(id));
        self.send_json(self.client.put(self.memo_url(id)).json(draft), "Update memo")
            .await
    }

    async fn delete(&self, id: &MemoId) -> Result<()> {
        tracing::debug!("DELETE {}", self.memo_url(id));
        self.send(self.client.delete(self.memo_url(id)), "Delete memo")
            .await?;
        Ok(())
    }

    async fn health(&self) -> Result<serde_json::Value> {
        let url = format!("{}/actuator/health", self.base_url);
        tracing::debug!("GET {}", url);
        self.send_json(self.client.get(url), "Health check").await
    }
}
