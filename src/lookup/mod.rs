//! Lookup service - the high-level API for turning a share URL into metadata
//!
//! One lookup runs the two pipeline stages in order:
//! 1. Resolve the URL across platforms via the link-resolution service
//! 2. Enrich the result with entity data from the authoritative platform
//!
//! Resolution is a hard dependency and its failures surface as errors.
//! Enrichment degrades silently to the resolver's own entity data.

use std::sync::Arc;

use url::Url;

use crate::config::Config;
use crate::enrichment::{MetadataEnricher, SpotifyApi, SpotifyWebClient, Strategy};
use crate::error::{Error, Result};
use crate::model::{MusicMetadata, ResolvedLinks};
use crate::resolver::{SongLinkApi, SongLinkClient};

/// Service for looking up music share URLs
pub struct LookupService {
    resolver: Arc<dyn SongLinkApi>,
    enricher: MetadataEnricher,
}

impl LookupService {
    /// Create a service wired to the real clients.
    ///
    /// The embed client is process-wide; building a second service reuses
    /// its connection pool.
    pub fn from_config(config: &Config) -> Self {
        Self::with_clients(
            Arc::new(SongLinkClient::new()),
            Arc::new(SpotifyWebClient::shared().clone()),
            config.enrichment.strategy,
        )
    }

    /// Create a service with explicit clients (tests swap in mocks here)
    pub fn with_clients(
        resolver: Arc<dyn SongLinkApi>,
        spotify: Arc<dyn SpotifyApi>,
        strategy: Strategy,
    ) -> Self {
        Self {
            resolver,
            enricher: MetadataEnricher::new(spotify, strategy),
        }
    }

    /// Look up a music share URL and return the merged metadata response.
    pub async fn lookup(&self, url: &str) -> Result<MusicMetadata> {
        Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;

        let resolved = self.resolver.resolve(url).await?;
        let metadata = self.enricher.enrich(&resolved).await;

        Ok(MusicMetadata::from_parts(metadata, resolved))
    }

    /// Resolve a music share URL across platforms without enrichment.
    pub async fn resolve(&self, url: &str) -> Result<ResolvedLinks> {
        Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;

        Ok(self.resolver.resolve(url).await?)
    }
}
