//! Command-line interface for tunelink.
//!
//! This module provides CLI commands for looking up and resolving music
//! share URLs, and for managing the persisted configuration.

mod commands;

pub use commands::{Cli, Commands, run_command};
