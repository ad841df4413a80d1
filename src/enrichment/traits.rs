//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementation, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use super::domain::{EnrichError, SpotifyEntity, TrackPreview};

/// Trait for Spotify entity and page access.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Fetch the full entity record behind a track or album URL.
    async fn entity_data(&self, entity_url: &str) -> Result<SpotifyEntity, EnrichError>;

    /// Fetch the flat preview record behind a track or album URL.
    async fn preview(&self, entity_url: &str) -> Result<TrackPreview, EnrichError>;

    /// Fetch a page as raw HTML, for the scrape helpers.
    async fn page_document(&self, url: &str) -> Result<String, EnrichError>;
}

// Implement the trait for the real client

#[async_trait]
impl SpotifyApi for super::spotify::SpotifyWebClient {
    async fn entity_data(&self, entity_url: &str) -> Result<SpotifyEntity, EnrichError> {
        self.entity_data(entity_url).await
    }

    async fn preview(&self, entity_url: &str) -> Result<TrackPreview, EnrichError> {
        self.preview(entity_url).await
    }

    async fn page_document(&self, url: &str) -> Result<String, EnrichError> {
        self.page_document(url).await
    }
}
