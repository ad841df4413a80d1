//! Song.link / Odesli HTTP client
//!
//! Handles communication with the cross-platform link-resolution service.
//! See: https://odesli.co/
//!
//! One call per lookup: `GET /links?url=<encoded>` returns the canonical
//! share page, every known platform link, and the entity records. The
//! service needs no API key for moderate request volumes.

use super::{ResolveError, adapter, dto};
use crate::model::ResolvedLinks;

/// Link-resolution API client
pub struct SongLinkClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SongLinkClient {
    /// Create a new client
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses (reduces bandwidth)
    /// - Send User-Agent header identifying the application
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://api.song.link/v1-alpha.1".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve a platform URL into its cross-platform link set
    pub async fn resolve(&self, url: &str) -> Result<ResolvedLinks, ResolveError> {
        let response = self.send_links_request(url).await?;
        adapter::to_resolved_links(response)
    }

    /// Send the HTTP request and parse the response
    async fn send_links_request(&self, url: &str) -> Result<dto::ResolveResponse, ResolveError> {
        let request_url = format!("{}/links?url={}", self.base_url, urlencoding::encode(url));

        let response = self
            .http_client
            .get(&request_url)
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Keep a snippet of the body, it usually names the rejection reason
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            } else {
                body.chars().take(200).collect()
            };
            return Err(ResolveError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<dto::ResolveResponse>()
            .await
            .map_err(|e| ResolveError::Parse(e.to_string()))
    }
}

impl Default for SongLinkClient {
    fn default() -> Self {
        Self::new()
    }
}
