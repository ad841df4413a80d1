//! Configuration inspection and update command.

use crate::config;
use crate::enrichment::Strategy;

/// Show the current configuration, or set and persist the strategy
pub fn cmd_config(strategy: Option<&str>) -> anyhow::Result<()> {
    let mut cfg = config::load();

    if let Some(name) = strategy {
        let parsed = name.parse::<Strategy>().map_err(anyhow::Error::msg)?;
        cfg.enrichment.strategy = parsed;
        config::save(&cfg)?;
        println!("✓ Enrichment strategy set to \"{}\"", parsed);
        return Ok(());
    }

    match config::config_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no config directory on this system)"),
    }
    println!();
    println!("  Strategy: {}", cfg.enrichment.strategy);

    Ok(())
}
