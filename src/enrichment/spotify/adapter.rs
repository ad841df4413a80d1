//! Convert embed payload DTOs to domain types
//!
//! This is the ONLY place where DTO-to-domain conversion happens.
//! Embed page revisions move fields around, so each domain field is read
//! from an ordered candidate list and the first non-empty value wins.

use super::dto::EntityDto;
use crate::enrichment::domain::{
    first_non_empty, AlbumData, EnrichError, SpotifyEntity, TrackData, TrackPreview,
};

/// Convert an entity record into the full-data domain representation.
///
/// Records typed "album" become [`SpotifyEntity::Album`]; everything else is
/// treated as a track. Title, artist and cover image are required - a record
/// with no usable candidate for one of them is unusable.
pub fn to_entity(dto: &EntityDto) -> Result<SpotifyEntity, EnrichError> {
    let image = cover_image(dto).ok_or(EnrichError::MissingField("image"))?;

    if dto.entity_type.as_deref() == Some("album") {
        let title = first_non_empty(&[dto.name.as_deref(), dto.title.as_deref()])
            .ok_or(EnrichError::MissingField("title"))?;
        let artist = first_non_empty(&[
            dto.subtitle.as_deref(),
            first_artist(dto),
            dto.artist.as_deref(),
        ])
        .ok_or(EnrichError::MissingField("artist"))?;

        Ok(SpotifyEntity::Album(AlbumData {
            title,
            artist,
            image,
        }))
    } else {
        let title = first_non_empty(&[
            dto.name.as_deref(),
            dto.title.as_deref(),
            dto.track.as_deref(),
        ])
        .ok_or(EnrichError::MissingField("title"))?;
        let artist = first_non_empty(&[
            first_artist(dto),
            dto.artist.as_deref(),
            dto.subtitle.as_deref(),
        ])
        .ok_or(EnrichError::MissingField("artist"))?;
        let release_date = dto
            .release_date
            .as_ref()
            .and_then(|d| d.iso_string.clone())
            .filter(|s| !s.is_empty());

        Ok(SpotifyEntity::Track(TrackData {
            title,
            artist,
            image,
            release_date,
        }))
    }
}

/// Project an entity record into the flat preview representation.
///
/// `title` names the record itself; `track` names a single song. A track
/// record is its own track, an album record names its first track-list row.
/// Nothing is required here; the preview strategy decides downstream which
/// absent fields it can live with.
pub fn to_preview(dto: &EntityDto) -> TrackPreview {
    let track = if dto.entity_type.as_deref() == Some("album") {
        first_track_title(dto)
    } else {
        first_non_empty(&[
            dto.name.as_deref(),
            dto.title.as_deref(),
            dto.track.as_deref(),
        ])
    };

    TrackPreview {
        title: first_non_empty(&[dto.name.as_deref(), dto.title.as_deref()]),
        track,
        artist: first_non_empty(&[
            dto.subtitle.as_deref(),
            first_artist(dto),
            dto.artist.as_deref(),
        ]),
        image: first_non_empty(&[visual_identity_image(dto), dto.image.as_deref()]),
        date: dto
            .release_date
            .as_ref()
            .and_then(|d| d.iso_string.as_deref())
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

fn cover_image(dto: &EntityDto) -> Option<String> {
    first_non_empty(&[visual_identity_image(dto), dto.image.as_deref()])
}

fn visual_identity_image(dto: &EntityDto) -> Option<&str> {
    dto.visual_identity
        .as_ref()
        .and_then(|v| v.background_base.as_ref())
        .and_then(|b| b.background_image_url.as_deref())
}

fn first_artist(dto: &EntityDto) -> Option<&str> {
    dto.artists.first().and_then(|a| a.name.as_deref())
}

fn first_track_title(dto: &EntityDto) -> Option<String> {
    dto.track_list
        .first()
        .and_then(|row| row.title.as_deref())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
