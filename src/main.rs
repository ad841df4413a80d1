//! tunelink - music share-link lookup.
//!
//! Takes a share URL for a track or album on any supported platform,
//! resolves it to its counterparts on every other platform, and enriches
//! the result with metadata from Spotify.

pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod lookup;
pub mod model;
pub mod resolver;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("tunelink=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
