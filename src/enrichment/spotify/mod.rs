//! Spotify enrichment source
//!
//! Spotify is the authoritative platform for metadata: when a resolved link
//! set carries a Spotify URL we pull the richer entity record from the embed
//! page instead of settling for the resolver's thumbnail-grade data.

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::SpotifyWebClient;

/// Key under which the resolution service lists this platform
pub const PLATFORM: &str = "spotify";
