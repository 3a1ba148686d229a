// src/config.rs

//! Configuration for the palette generator.
//!
//! The defaults reproduce the fixed setup: every colormap the built-in
//! registry knows, 2048 samples each, the (1.0, 0.9, 0.9) channel tint and a
//! `palettes/` directory next to the crate. An optional JSON file can
//! override any subset of these fields.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::ChannelAdjust;
use crate::colormap::registry::Registry;

/// Samples per palette.
pub const DEFAULT_PALETTE_SIZE: usize = 2048;

/// Name of the optional overrides file, looked up next to the crate.
pub const CONFIG_FILE_NAME: &str = "make_palettes.json";

/// Name of the output directory, created next to the crate.
pub const PALETTE_DIR_NAME: &str = "palettes";

/// Log filter used when `RUST_LOG` is unset. Progress lines bypass it.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Everything the generator needs to know about a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)] // Missing fields keep their default values.
pub struct Config {
    /// Colormaps to generate, in output order.
    pub colormaps: Vec<String>,
    /// Number of evenly spaced samples per palette.
    pub palette_size: usize,
    /// Per-channel multiplier applied before quantization.
    pub color_adjust: ChannelAdjust,
    /// Directory receiving one `<name>.txt` per colormap.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            colormaps: Registry::supported()
                .into_iter()
                .map(str::to_string)
                .collect(),
            palette_size: DEFAULT_PALETTE_SIZE,
            color_adjust: ChannelAdjust::default(),
            output_dir: base_dir().join(PALETTE_DIR_NAME),
        }
    }
}

impl Config {
    /// Loads overrides from the JSON file at `path`, or the defaults when
    /// there is no such file. A file that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config: no file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Default location of the overrides file.
    pub fn default_path() -> PathBuf {
        base_dir().join(CONFIG_FILE_NAME)
    }
}

/// The directory this tool lives in; output and config paths hang off it.
fn base_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
