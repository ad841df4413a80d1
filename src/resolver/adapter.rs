//! Adapter layer: Convert link-resolution DTOs to domain models
//!
//! This is the ONLY place where resolver DTO types are converted to domain
//! types. This isolates API changes - if the resolution service changes its
//! response format, only this file and dto.rs need to change.
//!
//! The primary-entity check lives here: a response whose `entityUniqueId`
//! has no record in `entitiesByUniqueId` is a hard resolution failure, never
//! a silently defaulted entity.

use super::{ResolveError, dto};
use crate::model::{PlatformLink, ResolvedEntity, ResolvedLinks};

/// Convert a /links response into the domain `ResolvedLinks`.
pub fn to_resolved_links(response: dto::ResolveResponse) -> Result<ResolvedLinks, ResolveError> {
    let primary = response
        .entities_by_unique_id
        .get(&response.entity_unique_id)
        .ok_or_else(|| ResolveError::EntityNotFound(response.entity_unique_id.clone()))?;

    let primary_entity = ResolvedEntity {
        title: primary.title.clone().unwrap_or_default(),
        artist: primary.artist_name.clone().unwrap_or_default(),
        thumbnail_url: primary.thumbnail_url.clone().unwrap_or_default(),
    };

    let platform_links = extract_platform_links(&response.links_by_platform)?;

    Ok(ResolvedLinks {
        canonical_link: response.page_url,
        platform_links,
        primary_entity,
    })
}

/// Build one `PlatformLink` per map entry, keeping the map's own order.
fn extract_platform_links(
    links: &serde_json::Map<String, serde_json::Value>,
) -> Result<Vec<PlatformLink>, ResolveError> {
    links
        .iter()
        .map(|(platform, value)| {
            let entry: dto::PlatformEntry = serde_json::from_value(value.clone())
                .map_err(|e| ResolveError::Parse(format!("platform '{}': {}", platform, e)))?;
            Ok(PlatformLink {
                platform: platform.clone(),
                url: entry.url,
            })
        })
        .collect()
}
