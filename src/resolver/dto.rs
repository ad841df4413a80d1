//! Song.link / Odesli API Data Transfer Objects
//!
//! These types match EXACTLY what the link-resolution API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the resolver module - convert to domain types.
//!
//! API Reference: https://odesli.co/ (v1-alpha.1 /links endpoint)
//!
//! `linksByPlatform` is kept as a raw JSON map because the set of platform
//! keys is open-ended and their order is meaningful: serde_json's
//! preserve_order feature keeps the service's insertion order, which is the
//! order callers see in the final response.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response from `GET /links?url=...`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    /// Id of the entity the input URL points at
    pub entity_unique_id: String,
    /// Country the service resolved links for
    pub user_country: Option<String>,
    /// Canonical cross-platform share URL
    pub page_url: String,
    /// platform name -> link record, in the service's own order
    #[serde(default)]
    pub links_by_platform: serde_json::Map<String, serde_json::Value>,
    /// entity id -> entity record
    #[serde(default)]
    pub entities_by_unique_id: HashMap<String, EntityRecord>,
}

/// One entry of `linksByPlatform`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformEntry {
    /// Platform-specific URL for the entity
    pub url: String,
    /// Id of the entity this platform link points at
    pub entity_unique_id: String,
}

/// One entry of `entitiesByUniqueId`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    /// Platform-scoped entity id
    pub id: Option<String>,
    /// "song" or "album"
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    /// Track or album title
    pub title: Option<String>,
    /// Primary artist name
    pub artist_name: Option<String>,
    /// Cover thumbnail URL
    pub thumbnail_url: Option<String>,
    /// Which platform's API supplied this record
    pub api_provider: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
