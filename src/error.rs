//! Application-wide error types.
//!
//! This module provides a unified error hierarchy for the application.
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g., [`ResolveError`], [`EnrichError`]) for
//!   detailed handling
//! - Only resolution problems are fatal for a lookup; enrichment errors are
//!   handled inside the enricher and never reach this level
//!
//! [`ResolveError`]: crate::resolver::ResolveError
//! [`EnrichError`]: crate::enrichment::EnrichError

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be parsed as a URL at all
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Link resolution failed; there is nothing to build a response from
    #[error("Resolution error: {0}")]
    Resolution(#[from] crate::resolver::ResolveError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
