//! Minimal embedding example for geoip-core
//!
//! This example demonstrates using the converters as a library: the host
//! fills a container, registers the converters it wants, and runs them.
//!
//! ## Environment
//!
//! - `GEOIP_LOG_LEVEL`: trace, debug, info (default), warn, error
//! - `GEOIP_OUTPUT_DIR`: where to write the script (default: output/mikrotik)

use anyhow::{Context, Result};
use geoip_core::{Action, Container, ConverterRegistry, Entry, MemoryContainer};
use std::env;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Sample data standing in for what input converters would load
const SAMPLE_ENTRIES: &[(&str, &[&str])] = &[
    ("cn", &["1.0.1.0/24", "1.0.2.0/23", "2001:250::/35"]),
    ("private", &["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16", "fc00::/7"]),
    ("us", &["3.0.0.0/9", "2600:1f00::/24"]),
];

fn build_container() -> Result<MemoryContainer> {
    let mut container = MemoryContainer::new();
    for (name, prefixes) in SAMPLE_ENTRIES {
        let mut entry = Entry::new(name);
        for prefix in prefixes.iter() {
            entry
                .add_prefix_str(prefix)
                .with_context(|| format!("Invalid sample prefix for {}", name))?;
        }
        container.add(entry);
    }
    Ok(container)
}

fn main() -> Result<()> {
    let log_level = match env::var("GEOIP_LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let container = build_container()?;
    info!("Container loaded: {} entries", container.len());

    // Registration happens here, at the composition root
    let registry = ConverterRegistry::new();
    geoip_output_mikrotik::register(&registry);

    let output_dir = env::var("GEOIP_OUTPUT_DIR").unwrap_or_else(|_| "output/mikrotik".to_string());
    let options = serde_json::json!({
        "outputName": "mikrotik-acl.rsc",
        "outputDir": output_dir,
        "overwriteList": ["private"],
        "onlyIPType": "ipv4",
        "aclistName": "GEO",
    });

    let converter = registry.create_output_converter(
        geoip_output_mikrotik::TYPE_MIKROTIK_SCRIPT_OUT,
        Action::Output,
        &serde_json::to_vec(&options)?,
    )?;

    info!(
        "Running {} ({}): {}",
        converter.type_name(),
        converter.action(),
        converter.description()
    );
    converter.output(&container)?;

    info!("Done");
    Ok(())
}
