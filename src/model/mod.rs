//! Core data models for the lookup pipeline.
//!
//! Defines the types that flow between the two pipeline stages:
//! [`ResolvedLinks`] (resolver output), [`EnrichedMetadata`] (enricher
//! output), and the final [`MusicMetadata`] response. External API
//! responses never appear here directly - clients convert their DTOs
//! into these types via adapters.

use serde::Serialize;

/// A single platform entry from the link-resolution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformLink {
    /// Platform name as keyed by the resolution service (e.g. "spotify")
    pub platform: String,
    /// Platform-specific URL for the same entity
    pub url: String,
}

/// Minimal entity record the resolution service associates with the input URL.
///
/// Used as the fallback metadata source when enrichment is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntity {
    /// Entity title (track or album name)
    pub title: String,
    /// Primary artist name
    pub artist: String,
    /// Thumbnail image URL
    pub thumbnail_url: String,
}

/// Everything the link-resolution stage produces for one input URL.
///
/// Immutable after creation; owned by the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLinks {
    /// The service's canonical cross-platform share URL
    pub canonical_link: String,
    /// One entry per platform, in the order the service returned them
    pub platform_links: Vec<PlatformLink>,
    /// The entity record keyed by the service's primary entity id
    pub primary_entity: ResolvedEntity,
}

impl ResolvedLinks {
    /// URL for a specific platform, if the service returned one.
    pub fn platform_url(&self, platform: &str) -> Option<&str> {
        self.platform_links
            .iter()
            .find(|link| link.platform == platform)
            .map(|link| link.url.as_str())
    }
}

/// Metadata assembled by the enrichment stage.
///
/// Each field is sourced independently with its own fallback order.
/// `album` is empty (never absent) when unknown; `release_date` is
/// `None` (never empty) when unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub release_date: Option<String>,
    pub image: String,
}

/// Final response body for one lookup.
///
/// Field names and order match the wire format consumed by callers;
/// `release_date` and `genres` serialize as explicit JSON nulls when
/// absent rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub release_date: Option<String>,
    /// Always null - the enrichment source has no per-track genre data
    pub genres: Option<Vec<String>>,
    pub image: String,
    pub platform_links: Vec<PlatformLink>,
    pub universal_link: String,
}

impl MusicMetadata {
    /// Merge enriched metadata with the resolved link set into a response.
    pub fn from_parts(metadata: EnrichedMetadata, links: ResolvedLinks) -> Self {
        Self {
            title: metadata.title,
            artist: metadata.artist,
            album: metadata.album,
            release_date: metadata.release_date,
            genres: None,
            image: metadata.image,
            platform_links: links.platform_links,
            universal_link: links.canonical_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_links() -> ResolvedLinks {
        ResolvedLinks {
            canonical_link: "https://song.link/s/abc123".to_string(),
            platform_links: vec![
                PlatformLink {
                    platform: "spotify".to_string(),
                    url: "https://open.spotify.com/track/abc123".to_string(),
                },
                PlatformLink {
                    platform: "youtube".to_string(),
                    url: "https://youtube.com/watch?v=xyz".to_string(),
                },
            ],
            primary_entity: ResolvedEntity {
                title: "Some Song".to_string(),
                artist: "Some Artist".to_string(),
                thumbnail_url: "https://i.scdn.co/image/thumb".to_string(),
            },
        }
    }

    #[test]
    fn test_platform_url_lookup() {
        let links = sample_links();
        assert_eq!(
            links.platform_url("spotify"),
            Some("https://open.spotify.com/track/abc123")
        );
        assert_eq!(links.platform_url("tidal"), None);
    }

    #[test]
    fn test_from_parts_merges_links_and_metadata() {
        let metadata = EnrichedMetadata {
            title: "Some Song".to_string(),
            artist: "Some Artist".to_string(),
            album: "Some Album".to_string(),
            release_date: Some("11/12/1987".to_string()),
            image: "https://i.scdn.co/image/cover".to_string(),
        };

        let response = MusicMetadata::from_parts(metadata, sample_links());

        assert_eq!(response.title, "Some Song");
        assert_eq!(response.album, "Some Album");
        assert_eq!(response.universal_link, "https://song.link/s/abc123");
        assert_eq!(response.platform_links.len(), 2);
        assert!(response.genres.is_none());
    }

    #[test]
    fn test_response_serializes_camel_case_with_explicit_nulls() {
        let metadata = EnrichedMetadata {
            title: "Some Song".to_string(),
            artist: "Some Artist".to_string(),
            album: String::new(),
            release_date: None,
            image: "https://i.scdn.co/image/thumb".to_string(),
        };

        let response = MusicMetadata::from_parts(metadata, sample_links());
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"releaseDate\":null"));
        assert!(json.contains("\"genres\":null"));
        assert!(json.contains("\"platformLinks\""));
        assert!(json.contains("\"universalLink\""));
        assert!(json.contains("\"album\":\"\""));
    }

    #[test]
    fn test_platform_links_keep_their_order() {
        let response = MusicMetadata::from_parts(
            EnrichedMetadata {
                title: "t".to_string(),
                artist: "a".to_string(),
                album: String::new(),
                release_date: None,
                image: "i".to_string(),
            },
            sample_links(),
        );

        let platforms: Vec<_> = response
            .platform_links
            .iter()
            .map(|l| l.platform.as_str())
            .collect();
        assert_eq!(platforms, vec!["spotify", "youtube"]);
    }
}
