//! Metadata enricher - upgrades resolver data with platform entity records
//!
//! The resolution service only knows a title, an artist and a thumbnail.
//! When the resolved link set includes Spotify the enricher goes there for
//! the real metadata:
//! 1. Fetch the entity record behind the Spotify URL
//! 2. For albums, scrape the release date from the page's JSON-LD block
//! 3. For tracks, follow the page's album link and fetch that record too
//! 4. Reformat ISO release dates to MM/DD/YYYY
//!
//! That is the full-data strategy. The configurable preview strategy takes
//! one flat record as-is instead, with no secondary fetches and no date
//! reformatting.
//!
//! Failures here degrade the result instead of aborting it. A failed
//! enrichment falls back to the resolver's own entity data; a failed
//! secondary scrape only costs the one field it would have filled.

use std::sync::Arc;

use crate::enrichment::domain::{EnrichError, SpotifyEntity, Strategy, first_non_empty};
use crate::enrichment::{scrape, spotify, traits::SpotifyApi};
use crate::model::{EnrichedMetadata, ResolvedEntity, ResolvedLinks};

/// Enriches resolved links with metadata from the authoritative platform
pub struct MetadataEnricher {
    spotify: Arc<dyn SpotifyApi>,
    strategy: Strategy,
}

impl MetadataEnricher {
    /// Create an enricher using the given source and fetch strategy
    pub fn new(spotify: Arc<dyn SpotifyApi>, strategy: Strategy) -> Self {
        Self { spotify, strategy }
    }

    /// Enrich a resolved link set.
    ///
    /// Never fails: when the platform is absent from the link set or any
    /// fetch goes wrong, the result is built from the resolver's entity data
    /// instead (empty album, no release date, thumbnail as image).
    pub async fn enrich(&self, resolved: &ResolvedLinks) -> EnrichedMetadata {
        let Some(entity_url) = resolved.platform_url(spotify::PLATFORM) else {
            tracing::debug!("No {} link to enrich from", spotify::PLATFORM);
            return fallback_metadata(&resolved.primary_entity);
        };

        match self.fetch_metadata(entity_url).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Enrichment failed, using resolver data: {}", e);
                fallback_metadata(&resolved.primary_entity)
            }
        }
    }

    async fn fetch_metadata(&self, entity_url: &str) -> Result<EnrichedMetadata, EnrichError> {
        match self.strategy {
            Strategy::Data => self.fetch_full_data(entity_url).await,
            Strategy::Preview => self.fetch_preview(entity_url).await,
        }
    }

    /// Full-data strategy: type-discriminated fetch with secondary scrapes
    async fn fetch_full_data(&self, entity_url: &str) -> Result<EnrichedMetadata, EnrichError> {
        match self.spotify.entity_data(entity_url).await? {
            SpotifyEntity::Album(album) => {
                // Embed records carry no album release date; the public page
                // has it in a JSON-LD block
                let release_date =
                    match scrape::release_date_from_page(self.spotify.as_ref(), entity_url).await
                    {
                        Ok(date) => date,
                        Err(e) => {
                            tracing::debug!("Release date scrape failed: {}", e);
                            None
                        }
                    };

                Ok(EnrichedMetadata {
                    title: album.title.clone(),
                    artist: album.artist,
                    album: album.title,
                    release_date: normalize_release_date(release_date),
                    image: album.image,
                })
            }
            SpotifyEntity::Track(track) => {
                let album = self.album_name_for_track(entity_url).await;

                Ok(EnrichedMetadata {
                    title: track.title,
                    artist: track.artist,
                    album,
                    release_date: normalize_release_date(track.release_date),
                    image: track.image,
                })
            }
        }
    }

    /// Resolve the album name for a track by following the track page's
    /// album link. Every failure mode yields an empty album name.
    async fn album_name_for_track(&self, track_url: &str) -> String {
        let album_url =
            match scrape::album_url_from_track_page(self.spotify.as_ref(), track_url).await {
                Ok(Some(url)) => url,
                Ok(None) => {
                    tracing::debug!("Track page does not reference an album");
                    return String::new();
                }
                Err(e) => {
                    tracing::debug!("Album link scrape failed: {}", e);
                    return String::new();
                }
            };

        match self.spotify.entity_data(&album_url).await {
            Ok(SpotifyEntity::Album(album)) => album.title,
            Ok(SpotifyEntity::Track(track)) => track.title,
            Err(e) => {
                tracing::debug!("Album fetch failed: {}", e);
                String::new()
            }
        }
    }

    /// Preview strategy: one flat record, release date passed through as-is
    async fn fetch_preview(&self, entity_url: &str) -> Result<EnrichedMetadata, EnrichError> {
        let preview = self.spotify.preview(entity_url).await?;

        let title = first_non_empty(&[preview.track.as_deref(), preview.title.as_deref()])
            .ok_or(EnrichError::MissingField("title"))?;

        // A record title matching the track name is the track itself; a
        // record title of its own names the surrounding album
        let album = if preview.title == preview.track {
            String::new()
        } else {
            preview.title.clone().unwrap_or_default()
        };

        let artist = preview
            .artist
            .filter(|s| !s.is_empty())
            .ok_or(EnrichError::MissingField("artist"))?;
        let image = preview
            .image
            .filter(|s| !s.is_empty())
            .ok_or(EnrichError::MissingField("image"))?;

        Ok(EnrichedMetadata {
            title,
            artist,
            album,
            release_date: preview.date.filter(|s| !s.is_empty()),
            image,
        })
    }
}

/// Build metadata from the resolver's own entity data.
///
/// This is the floor every failure path lands on: resolver title and artist,
/// the thumbnail as image, no album, no release date.
fn fallback_metadata(entity: &ResolvedEntity) -> EnrichedMetadata {
    EnrichedMetadata {
        title: entity.title.clone(),
        artist: entity.artist.clone(),
        album: String::new(),
        release_date: None,
        image: entity.thumbnail_url.clone(),
    }
}

/// Normalize an ISO-flavored release date to MM/DD/YYYY.
///
/// Bare dates and full RFC 3339 timestamps both appear in entity records.
/// Anything unparseable passes through unchanged.
fn normalize_release_date(raw: Option<String>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;

    if let Ok(date) = chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Some(date.format("%m/%d/%Y").to_string());
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(&raw) {
        return Some(stamp.format("%m/%d/%Y").to_string());
    }

    Some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::domain::{AlbumData, TrackData, TrackPreview};
    use crate::enrichment::traits::mocks::MockSpotify;
    use crate::model::PlatformLink;

    const TRACK_URL: &str = "https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT";
    const ALBUM_URL: &str = "https://open.spotify.com/album/6XhjNHCyCDyyGJRM5mg40G";

    fn resolved_with(platform: &str, url: &str) -> ResolvedLinks {
        ResolvedLinks {
            canonical_link: "https://song.link/s/test".to_string(),
            platform_links: vec![PlatformLink {
                platform: platform.to_string(),
                url: url.to_string(),
            }],
            primary_entity: ResolvedEntity {
                title: "Resolver Title".to_string(),
                artist: "Resolver Artist".to_string(),
                thumbnail_url: "https://resolver.example/thumb.jpg".to_string(),
            },
        }
    }

    fn track_entity() -> SpotifyEntity {
        SpotifyEntity::Track(TrackData {
            title: "Never Gonna Give You Up".to_string(),
            artist: "Rick Astley".to_string(),
            image: "https://i.scdn.co/image/track".to_string(),
            release_date: Some("1987-11-12".to_string()),
        })
    }

    fn album_entity() -> SpotifyEntity {
        SpotifyEntity::Album(AlbumData {
            title: "Whenever You Need Somebody".to_string(),
            artist: "Rick Astley".to_string(),
            image: "https://i.scdn.co/image/album".to_string(),
        })
    }

    fn make_enricher(mock: MockSpotify, strategy: Strategy) -> MetadataEnricher {
        MetadataEnricher::new(Arc::new(mock), strategy)
    }

    #[tokio::test]
    async fn test_track_enriched_with_album_from_track_page() {
        let mock = MockSpotify::empty()
            .with_entity(TRACK_URL, track_entity())
            .with_entity(ALBUM_URL, album_entity())
            .with_page(
                TRACK_URL,
                r#"<html><a href="https://open.spotify.com/album/6XhjNHCyCDyyGJRM5mg40G">album</a></html>"#,
            );
        let enricher = make_enricher(mock, Strategy::Data);

        let metadata = enricher.enrich(&resolved_with("spotify", TRACK_URL)).await;

        assert_eq!(metadata.title, "Never Gonna Give You Up");
        assert_eq!(metadata.artist, "Rick Astley");
        assert_eq!(metadata.album, "Whenever You Need Somebody");
        assert_eq!(metadata.release_date.as_deref(), Some("11/12/1987"));
        assert_eq!(metadata.image, "https://i.scdn.co/image/track");
    }

    /// The album scrape is secondary; losing it only loses the album field
    #[tokio::test]
    async fn test_track_without_page_keeps_rest_of_metadata() {
        let mock = MockSpotify::empty().with_entity(TRACK_URL, track_entity());
        let enricher = make_enricher(mock, Strategy::Data);

        let metadata = enricher.enrich(&resolved_with("spotify", TRACK_URL)).await;

        assert_eq!(metadata.title, "Never Gonna Give You Up");
        assert_eq!(metadata.album, "");
        assert_eq!(metadata.release_date.as_deref(), Some("11/12/1987"));
    }

    #[tokio::test]
    async fn test_album_mirrors_title_and_scrapes_release_date() {
        let page = r#"<html><head>
            <script type="application/ld+json">{"@type": "MusicAlbum", "datePublished": "1987-11-15"}</script>
        </head></html>"#;
        let mock = MockSpotify::empty()
            .with_entity(ALBUM_URL, album_entity())
            .with_page(ALBUM_URL, page);
        let enricher = make_enricher(mock, Strategy::Data);

        let metadata = enricher.enrich(&resolved_with("spotify", ALBUM_URL)).await;

        assert_eq!(metadata.title, "Whenever You Need Somebody");
        assert_eq!(metadata.album, "Whenever You Need Somebody");
        assert_eq!(metadata.release_date.as_deref(), Some("11/15/1987"));
        assert_eq!(metadata.image, "https://i.scdn.co/image/album");
    }

    #[tokio::test]
    async fn test_album_without_page_has_no_release_date() {
        let mock = MockSpotify::empty().with_entity(ALBUM_URL, album_entity());
        let enricher = make_enricher(mock, Strategy::Data);

        let metadata = enricher.enrich(&resolved_with("spotify", ALBUM_URL)).await;

        assert_eq!(metadata.album, "Whenever You Need Somebody");
        assert!(metadata.release_date.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_to_resolver_data() {
        let mock = MockSpotify::with_error(EnrichError::Network("connection refused".to_string()));
        let enricher = make_enricher(mock, Strategy::Data);

        let metadata = enricher.enrich(&resolved_with("spotify", TRACK_URL)).await;

        assert_eq!(metadata.title, "Resolver Title");
        assert_eq!(metadata.artist, "Resolver Artist");
        assert_eq!(metadata.album, "");
        assert!(metadata.release_date.is_none());
        assert_eq!(metadata.image, "https://resolver.example/thumb.jpg");
    }

    /// Without a spotify link the source must not even be contacted
    #[tokio::test]
    async fn test_no_spotify_link_skips_source_entirely() {
        let enricher = make_enricher(MockSpotify::unused(), Strategy::Data);

        let metadata = enricher
            .enrich(&resolved_with("tidal", "https://tidal.com/track/1"))
            .await;

        assert_eq!(metadata.title, "Resolver Title");
        assert_eq!(metadata.image, "https://resolver.example/thumb.jpg");
    }

    #[tokio::test]
    async fn test_preview_track_has_empty_album() {
        let mock = MockSpotify::with_preview(TrackPreview {
            title: Some("Never Gonna Give You Up".to_string()),
            track: Some("Never Gonna Give You Up".to_string()),
            artist: Some("Rick Astley".to_string()),
            image: Some("https://i.scdn.co/image/preview".to_string()),
            date: Some("1987-11-12".to_string()),
        });
        let enricher = make_enricher(mock, Strategy::Preview);

        let metadata = enricher.enrich(&resolved_with("spotify", TRACK_URL)).await;

        assert_eq!(metadata.title, "Never Gonna Give You Up");
        assert_eq!(metadata.album, "");
        // Preview dates are passed through, not reformatted
        assert_eq!(metadata.release_date.as_deref(), Some("1987-11-12"));
    }

    /// On album records the track field leads the title and the record
    /// title lands in the album field
    #[tokio::test]
    async fn test_preview_album_uses_title_as_album() {
        let mock = MockSpotify::with_preview(TrackPreview {
            title: Some("Whenever You Need Somebody".to_string()),
            track: Some("Never Gonna Give You Up".to_string()),
            artist: Some("Rick Astley".to_string()),
            image: Some("https://i.scdn.co/image/preview".to_string()),
            date: None,
        });
        let enricher = make_enricher(mock, Strategy::Preview);

        let metadata = enricher.enrich(&resolved_with("spotify", ALBUM_URL)).await;

        assert_eq!(metadata.title, "Never Gonna Give You Up");
        assert_eq!(metadata.album, "Whenever You Need Somebody");
        assert!(metadata.release_date.is_none());
    }

    #[tokio::test]
    async fn test_preview_without_track_name_keeps_record_title() {
        let mock = MockSpotify::with_preview(TrackPreview {
            title: Some("Whenever You Need Somebody".to_string()),
            track: None,
            artist: Some("Rick Astley".to_string()),
            image: Some("https://i.scdn.co/image/preview".to_string()),
            date: None,
        });
        let enricher = make_enricher(mock, Strategy::Preview);

        let metadata = enricher.enrich(&resolved_with("spotify", ALBUM_URL)).await;

        assert_eq!(metadata.title, "Whenever You Need Somebody");
        assert_eq!(metadata.album, "Whenever You Need Somebody");
    }

    /// A preview missing a required field is a failed enrichment
    #[tokio::test]
    async fn test_preview_without_artist_falls_back() {
        let mock = MockSpotify::with_preview(TrackPreview {
            title: Some("Never Gonna Give You Up".to_string()),
            track: Some("Never Gonna Give You Up".to_string()),
            artist: None,
            image: Some("https://i.scdn.co/image/preview".to_string()),
            date: None,
        });
        let enricher = make_enricher(mock, Strategy::Preview);

        let metadata = enricher.enrich(&resolved_with("spotify", TRACK_URL)).await;

        assert_eq!(metadata.title, "Resolver Title");
        assert_eq!(metadata.artist, "Resolver Artist");
    }

    #[test]
    fn test_normalize_bare_iso_date() {
        assert_eq!(
            normalize_release_date(Some("1987-11-12".to_string())).as_deref(),
            Some("11/12/1987")
        );
    }

    #[test]
    fn test_normalize_rfc3339_timestamp() {
        assert_eq!(
            normalize_release_date(Some("1987-11-12T00:00:00Z".to_string())).as_deref(),
            Some("11/12/1987")
        );
    }

    #[test]
    fn test_normalize_absent_or_empty() {
        assert!(normalize_release_date(None).is_none());
        assert!(normalize_release_date(Some(String::new())).is_none());
    }

    /// Unparseable values pass through rather than becoming garbage
    #[test]
    fn test_normalize_passes_unknown_formats_through() {
        assert_eq!(
            normalize_release_date(Some("Unknown".to_string())).as_deref(),
            Some("Unknown")
        );
    }
}
