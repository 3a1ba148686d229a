// src/main.rs

use colormap_palettes::config::DEFAULT_LOG_FILTER;
use colormap_palettes::{Config, PaletteGenerator, Registry};

// Logging
use anyhow::Context;
use log::info;

/// Precomputes a palette file for every configured colormap.
fn main() -> anyhow::Result<()> {
    // Progress lines go to stderr regardless; log records only when RUST_LOG asks.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .format_timestamp_micros()
    .init();

    // --- Configuration ---
    let config_path = Config::default_path();
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    info!(
        "{} colormaps, {} samples each, channel adjust {:?}",
        config.colormaps.len(),
        config.palette_size,
        config.color_adjust.0
    );

    // --- Generate ---
    let generator = PaletteGenerator::new(&config, Registry);
    let stderr = std::io::stderr();
    let report = generator.run(&mut stderr.lock())?;

    info!(
        "Done: {} palette files in {}",
        report.written.len(),
        config.output_dir.display()
    );
    Ok(())
}
