//! Trait definition for the link-resolution client.
//!
//! This trait enables dependency injection and mocking for tests.
//! Production code uses the real [`SongLinkClient`](super::SongLinkClient),
//! while tests can substitute mock implementations.

use async_trait::async_trait;

use super::ResolveError;
use crate::model::ResolvedLinks;

/// Trait for cross-platform link resolution.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SongLinkApi: Send + Sync {
    /// Resolve one platform URL into its cross-platform link set.
    async fn resolve(&self, url: &str) -> Result<ResolvedLinks, ResolveError>;
}

#[async_trait]
impl SongLinkApi for super::SongLinkClient {
    async fn resolve(&self, url: &str) -> Result<ResolvedLinks, ResolveError> {
        self.resolve(url).await
    }
}
