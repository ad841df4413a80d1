//! Spotify embed page client
//!
//! There is no public metadata API to call anonymously, but every track and
//! album has an embed page whose `__NEXT_DATA__` script tag carries the full
//! entity record as JSON. The client rewrites a share URL to its embed
//! counterpart, fetches the page and lifts the record out of the markup.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichError, SpotifyEntity, TrackPreview};

const BASE_URL: &str = "https://open.spotify.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

static NEXT_DATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<script id="__NEXT_DATA__" type="application/json"[^>]*>(.+?)</script>"#)
        .expect("__NEXT_DATA__ regex should compile")
});

static SHARED: Lazy<SpotifyWebClient> = Lazy::new(SpotifyWebClient::new);

/// Client for Spotify embed pages
#[derive(Debug, Clone)]
pub struct SpotifyWebClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SpotifyWebClient {
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Process-wide instance, built on first use.
    /// Clones share the underlying connection pool.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Create a client pointing at a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Self {
        let mut client = Self::new();
        client.base_url = base_url.to_string();
        client
    }

    /// Fetch the full entity record behind a track or album URL
    pub async fn entity_data(&self, entity_url: &str) -> Result<SpotifyEntity, EnrichError> {
        let entity = self.fetch_embed_entity(entity_url).await?;
        adapter::to_entity(&entity)
    }

    /// Fetch the flat preview record behind a track or album URL
    pub async fn preview(&self, entity_url: &str) -> Result<TrackPreview, EnrichError> {
        let entity = self.fetch_embed_entity(entity_url).await?;
        Ok(adapter::to_preview(&entity))
    }

    /// Fetch a page as raw HTML
    pub async fn page_document(&self, url: &str) -> Result<String, EnrichError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| EnrichError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EnrichError::Http {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| EnrichError::Network(e.to_string()))
    }

    async fn fetch_embed_entity(&self, entity_url: &str) -> Result<dto::EntityDto, EnrichError> {
        let embed = self.embed_url(entity_url)?;
        let document = self.page_document(&embed).await?;
        let payload = extract_next_data(&document)?;

        // Error pages keep the wrapper but drop the state block
        let state = payload
            .props
            .page_props
            .state
            .ok_or(EnrichError::NoEntityData)?;

        Ok(state.data.entity)
    }

    /// Rewrite a share URL to its embed counterpart.
    ///
    /// `/track/{id}` and `/album/{id}` become `/embed/track/{id}` and
    /// `/embed/album/{id}`. Locale prefixes like `/intl-de/` are skipped;
    /// anything without a track or album segment is unsupported.
    fn embed_url(&self, entity_url: &str) -> Result<String, EnrichError> {
        let parsed = Url::parse(entity_url)
            .map_err(|_| EnrichError::UnsupportedUrl(entity_url.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or_else(|| EnrichError::UnsupportedUrl(entity_url.to_string()))?;

        let kind = segments
            .find(|s| *s == "track" || *s == "album")
            .ok_or_else(|| EnrichError::UnsupportedUrl(entity_url.to_string()))?;
        let id = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| EnrichError::UnsupportedUrl(entity_url.to_string()))?;

        Ok(format!("{}/embed/{}/{}", self.base_url, kind, id))
    }
}

impl Default for SpotifyWebClient {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_next_data(document: &str) -> Result<dto::EmbedPayload, EnrichError> {
    let captures = NEXT_DATA_RE
        .captures(document)
        .ok_or(EnrichError::NoEntityData)?;

    serde_json::from_str(&captures[1]).map_err(|e| EnrichError::Parse(e.to_string()))
}
