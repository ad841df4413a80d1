//! Spotify embed payload Data Transfer Objects
//!
//! These types match EXACTLY what the embed pages carry in their
//! `__NEXT_DATA__` JSON document.
//! DO NOT add fields that aren't in the payload.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! The entity record lives at `props.pageProps.state.data.entity`. Its shape
//! varies with the `type` discriminator: album payloads use `subtitle` for
//! the artist line and list their tracks in `trackList`, track payloads
//! carry an `artists` array and a `releaseDate` object. Field presence has
//! shifted across page revisions, so everything except the wrapper chain is
//! optional.

use serde::{Deserialize, Serialize};

/// Top of the `__NEXT_DATA__` document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedPayload {
    pub props: EmbedProps,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedProps {
    pub page_props: PageProps,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageProps {
    /// Absent on error pages (unknown ids, region blocks)
    pub state: Option<EmbedState>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedState {
    pub data: EmbedData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedData {
    pub entity: EntityDto,
}

/// The entity record for a track or album
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDto {
    /// "track" or "album"
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    /// Entity name (track title or album title)
    pub name: Option<String>,
    /// Alternate title field seen in some revisions
    pub title: Option<String>,
    /// Alternate track-name field seen in some revisions
    pub track: Option<String>,
    /// Artist line on album payloads
    pub subtitle: Option<String>,
    /// Flat artist field seen in some revisions
    pub artist: Option<String>,
    /// Credited artists on track payloads
    #[serde(default)]
    pub artists: Vec<ArtistDto>,
    /// Track rows on album payloads
    #[serde(default)]
    pub track_list: Vec<TrackListEntryDto>,
    /// Flat cover image URL
    pub image: Option<String>,
    /// Structured cover art block
    pub visual_identity: Option<VisualIdentityDto>,
    /// Release date block on track payloads
    pub release_date: Option<ReleaseDateDto>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistDto {
    pub name: Option<String>,
}

/// One row of an album payload's track list
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackListEntryDto {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualIdentityDto {
    pub background_base: Option<BackgroundBaseDto>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundBaseDto {
    pub background_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDateDto {
    pub iso_string: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the embed pages actually carry.
// If these fail, the page format has changed and we need to update our DTOs.
// ============================================================================
