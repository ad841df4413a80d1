//! Link resolution - maps one streaming-platform URL to its equivalents.
//!
//! First stage of the lookup pipeline. Calls the song.link (Odesli) service
//! and produces a [`ResolvedLinks`](crate::model::ResolvedLinks): the
//! canonical share link, every platform link the service knows about (in the
//! service's own order), and the minimal primary-entity record used as the
//! enrichment fallback.
//!
//! Resolution is a hard dependency: any failure here aborts the lookup, in
//! contrast to the enrichment stage which degrades gracefully.
//!
//! # Architecture
//!
//! Same layering as the enrichment clients:
//! - **DTOs** (`dto.rs`) - Exact API response shapes with contract tests
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`client.rs`) - HTTP client for the resolution service
//! - **Traits** (`traits.rs`) - Injection seam for mocking in tests

pub mod adapter;
pub mod client;
pub mod dto;
pub mod traits;

pub use client::SongLinkClient;
pub use traits::SongLinkApi;

/// Errors from the link-resolution stage.
///
/// All variants are fatal to the lookup: callers surface them as
/// client-visible failures rather than falling back.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Resolution service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse resolution response: {0}")]
    Parse(String),

    #[error("No entity data for '{0}' in resolution response")]
    EntityNotFound(String),
}
