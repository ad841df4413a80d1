//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `lookup`: share URL lookup and plain cross-platform resolution
//! - `config`: inspecting and updating the persisted configuration

mod config;
mod lookup;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

pub use config::cmd_config;
pub use lookup::{cmd_lookup, cmd_resolve};

/// tunelink CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up a music share URL and print its metadata and platform links
    Lookup {
        /// The share URL to look up (any supported platform)
        url: String,
        /// Print the response as JSON
        #[arg(long)]
        json: bool,
        /// Enrichment strategy: "data" or "preview" (overrides config)
        #[arg(short, long, env = "TUNELINK_STRATEGY")]
        strategy: Option<String>,
    },
    /// Resolve a music share URL across platforms without enrichment
    Resolve {
        /// The share URL to resolve
        url: String,
        /// Print the resolved links as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the current configuration, or change it
    Config {
        /// Set and persist the enrichment strategy: "data" or "preview"
        #[arg(long)]
        strategy: Option<String>,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Lookup {
            url,
            json,
            strategy,
        } => cmd_lookup(&rt, url, *json, strategy.as_deref()),
        Commands::Resolve { url, json } => cmd_resolve(&rt, url, *json),
        Commands::Config { strategy } => cmd_config(strategy.as_deref()),
    }
}
