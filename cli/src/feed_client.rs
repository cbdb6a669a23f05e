//! Client for the two external content feeds.

use anyhow::{Context, Result};
use culture_archive_shared::{Article, ContentKind, Envelope, FeedOutcome, Photograph};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for the external Article and Photograph APIs.
pub struct FeedClient {
    http: Client,
    api_base: String,
    admin_token: Option<String>,
}

impl FeedClient {
    /// `api_base` is the URL the `articles` and `photographs` collections
    /// hang off; a trailing slash is ignored. A blank token is dropped.
    pub fn new(api_base: &str, admin_token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("ca-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            admin_token: admin_token.filter(|token| !token.trim().is_empty()),
        })
    }

    /// Fetches both lists at once and merges whatever arrived. Neither
    /// request is retried or timed out.
    pub async fn load(&self) -> FeedOutcome {
        let (articles, photographs) = tokio::join!(
            self.fetch_list::<Article>(ContentKind::Article),
            self.fetch_list::<Photograph>(ContentKind::Photograph),
        );
        FeedOutcome::from_envelopes(articles, photographs)
    }

    /// Issues the kind-specific DELETE. `Ok` carries the server's message
    /// when it sent one.
    pub async fn delete(&self, kind: ContentKind, id: &str) -> Result<Option<String>, String> {
        let url = format!(
            "{}/{}/{}",
            self.api_base,
            kind.api_collection(),
            urlencoding::encode(id)
        );
        let mut request = self.http.delete(&url);
        if let Some(token) = &self.admin_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        let envelope: Envelope<serde_json::Value> = read_envelope(response).await?;
        if envelope.success {
            Ok(envelope.message)
        } else {
            Err(envelope.error.unwrap_or_else(|| "unknown error".to_string()))
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        kind: ContentKind,
    ) -> Result<Envelope<Vec<T>>, String> {
        let url = format!("{}/{}", self.api_base, kind.api_collection());
        let response = self
            .http
            .get(&url)
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        read_envelope(response).await
    }
}

// Failure responses still carry an envelope; only fall back to the status
// code when the body is not one.
async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Envelope<T>, String> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    serde_json::from_slice::<Envelope<T>>(&body).map_err(|e| {
        if status == StatusCode::OK {
            format!("Parse error: {e}")
        } else {
            format!("HTTP error: {status}")
        }
    })
}
