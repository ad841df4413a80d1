//! Share URL lookup and resolution commands.

use tokio::runtime::Runtime;

use crate::config;
use crate::enrichment::Strategy;
use crate::lookup::LookupService;

/// Look up a share URL and print the merged metadata
pub fn cmd_lookup(
    rt: &Runtime,
    url: &str,
    json: bool,
    strategy: Option<&str>,
) -> anyhow::Result<()> {
    let mut cfg = config::load();
    if let Some(name) = strategy {
        cfg.enrichment.strategy = name.parse::<Strategy>().map_err(anyhow::Error::msg)?;
    }

    let service = LookupService::from_config(&cfg);

    let metadata = match rt.block_on(service.lookup(url)) {
        Ok(metadata) => metadata,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    println!("✓ Looked up {}", url);
    println!();
    println!("  Title:   {}", metadata.title);
    println!("  Artist:  {}", metadata.artist);
    if !metadata.album.is_empty() {
        println!("  Album:   {}", metadata.album);
    }
    if let Some(ref date) = metadata.release_date {
        println!("  Release: {}", date);
    }
    println!("  Image:   {}", metadata.image);
    println!();
    println!("  Universal link: {}", metadata.universal_link);
    println!("  Platforms:");
    for link in &metadata.platform_links {
        println!("    {:<12} {}", link.platform, link.url);
    }

    Ok(())
}

/// Resolve a share URL across platforms without enrichment
pub fn cmd_resolve(rt: &Runtime, url: &str, json: bool) -> anyhow::Result<()> {
    let cfg = config::load();
    let service = LookupService::from_config(&cfg);

    let resolved = match rt.block_on(service.resolve(url)) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!("✓ Resolved {}", url);
    println!();
    println!("  Title:  {}", resolved.primary_entity.title);
    println!("  Artist: {}", resolved.primary_entity.artist);
    println!();
    println!("  Universal link: {}", resolved.canonical_link);
    println!("  Platforms:");
    for link in &resolved.platform_links {
        println!("    {:<12} {}", link.platform, link.url);
    }

    Ok(())
}
