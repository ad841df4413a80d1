//! Internal domain models for metadata enrichment.
//!
//! These types are OUR types - they don't change when the platform's
//! embed payloads change. All external API responses get converted into
//! these types via adapters.

use serde::{Deserialize, Serialize};

/// Which enrichment strategy to run against the authoritative platform.
///
/// Exactly one strategy is active per deployment; the two are alternative
/// implementations of the same enrichment contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Full type-discriminated data fetch (album/track aware, with
    /// secondary scrapes for album linkage and release date)
    #[default]
    Data,
    /// Lightweight flat preview fetch
    Preview,
}

impl Strategy {
    /// String form used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Data => "data",
            Strategy::Preview => "preview",
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(Strategy::Data),
            "preview" => Ok(Strategy::Preview),
            other => Err(format!(
                "unknown strategy '{}' (expected 'data' or 'preview')",
                other
            )),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity data from the platform's full-data fetch.
///
/// The payload carries a `type` discriminator; each variant has its own
/// field-extraction rules, applied in the adapter. Anything that is not
/// an album is treated as a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotifyEntity {
    Album(AlbumData),
    Track(TrackData),
}

/// Album fields after candidate-chain extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumData {
    pub title: String,
    pub artist: String,
    pub image: String,
}

/// Track fields after candidate-chain extraction.
///
/// A track payload names its own release date but not its album; the
/// album name comes from a secondary lookup in the enricher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackData {
    pub title: String,
    pub artist: String,
    pub image: String,
    /// ISO date string as the payload carried it, not yet reformatted
    pub release_date: Option<String>,
}

/// Flat record from the platform's preview fetch.
///
/// Every field is optional; the preview strategy applies its own
/// fallback rules over these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackPreview {
    pub title: Option<String>,
    pub track: Option<String>,
    pub artist: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
}

/// Errors during the primary enrichment fetch.
///
/// All recoverable: the enricher absorbs every one of these and falls
/// back to the resolver's entity record, so they never reach callers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Platform returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Failed to parse embed payload: {0}")]
    Parse(String),

    #[error("No embedded entity data in page")]
    NoEntityData,

    #[error("Not a recognizable track or album URL: {0}")]
    UnsupportedUrl(String),

    #[error("No usable {0} in entity data")]
    MissingField(&'static str),
}

/// Errors during the secondary page scrapes.
///
/// Absorbed field-locally: a failure empties one field (album name or
/// release date), never the whole enrichment.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] EnrichError),

    #[error("Failed to parse JSON-LD block: {0}")]
    Parse(String),
}

/// First non-empty candidate, in priority order.
///
/// Replaces chained `a || b || c` field fallbacks so the priority order
/// is testable in isolation. Empty strings are skipped like absent ones.
pub fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|candidate| *candidate)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
