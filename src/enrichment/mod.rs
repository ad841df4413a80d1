//! Metadata enrichment module - upgrades resolved links with platform metadata.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`spotify/dto.rs`) - Exact embed payload shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP client for the embed pages
//! - **Scrape** - Secondary page scraping for album links and release dates
//! - **Enricher** - High-level orchestration of the enrichment flow
//!
//! This decoupling means:
//! 1. Page format changes don't ripple through our codebase
//! 2. We can test payload contracts independently
//! 3. We can swap the source without changing business logic
//!
//! # Usage
//!
//! ```ignore
//! use enrichment::{MetadataEnricher, Strategy};
//!
//! let enricher = MetadataEnricher::new(
//!     Arc::new(SpotifyWebClient::shared().clone()),
//!     Strategy::Data,
//! );
//!
//! // Enrich a resolved link set; this never fails
//! let metadata = enricher.enrich(&resolved).await;
//! println!("Title: {}, Album: {}", metadata.title, metadata.album);
//! ```

pub mod domain;
pub mod enricher;
pub mod scrape;
pub mod spotify;
pub mod traits;

pub use domain::{EnrichError, ScrapeError, SpotifyEntity, Strategy, TrackPreview};
pub use enricher::MetadataEnricher;
pub use spotify::SpotifyWebClient;
pub use traits::SpotifyApi;
