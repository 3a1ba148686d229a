// src/generator.rs

//! The batch loop: for each configured colormap, sample, tint, quantize and
//! write one palette file.
//!
//! Strictly sequential. Each palette file is closed before the next colormap
//! is resolved. The first failure ends the run; files already written stay,
//! and the file being written may be left truncated.


use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use crate::colormap::ColormapResolver;
use crate::config::Config;
use crate::palette::Palette;

/// What a completed run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Palette files written, in processing order.
    pub written: Vec<PathBuf>,
}

pub struct PaletteGenerator<'a, R: ColormapResolver> {
    config: &'a Config,
    resolver: R,
}

impl<'a, R: ColormapResolver> PaletteGenerator<'a, R> {
    pub fn new(config: &'a Config, resolver: R) -> Self {
        PaletteGenerator { config, resolver }
    }

    /// Runs the whole batch, writing a `<name>...` line to `progress` before
    /// each colormap.
    pub fn run(&self, progress: &mut dyn Write) -> Result<GenerationReport> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;
        info!(
            "Generating {} palettes of {} samples into {}",
            self.config.colormaps.len(),
            self.config.palette_size,
            output_dir.display()
        );

        let mut report = GenerationReport::default();
        let mut seen = HashSet::new();

        for name in &self.config.colormaps {
            if !seen.insert(name.as_str()) {
                debug!("Generator: skipping repeated colormap '{}'", name);
                continue;
            }

            writeln!(progress, "{}...", name).context("Failed to report progress")?;
            report.written.push(self.generate_one(name)?);
        }

        info!("Wrote {} palette files", report.written.len());
        Ok(report)
    }

    fn generate_one(&self, name: &str) -> Result<PathBuf> {
        let colormap = self
            .resolver
            .resolve(name, self.config.palette_size)
            .with_context(|| format!("Failed to resolve colormap '{}'", name))?;
        let palette = Palette::from_colormap(&colormap, self.config.color_adjust);
        let path = palette.save(&self.config.output_dir, name)?;
        debug!("Generator: '{}' -> {}", name, path.display());
        Ok(path)
    }
}
