// src/palette.rs

//! Precomputed palettes and their on-disk text format.
//!
//! A palette file holds one entry per line as three space-separated decimal
//! integers, `R G B`, newline-terminated, in index order. The renderer that
//! consumes these files reads whitespace-separated triples until end of input.

#[cfg(test)]
mod tests;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::color::{ChannelAdjust, Rgb};
use crate::colormap::SampledColormap;

/// Extension used for palette files.
pub const PALETTE_EXTENSION: &str = "txt";

/// An ordered list of 8-bit colors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Palette { colors }
    }

    /// Samples every index of `colormap` and quantizes it through `adjust`.
    pub fn from_colormap(colormap: &SampledColormap, adjust: ChannelAdjust) -> Self {
        let colors = colormap
            .samples()
            .map(|sample| adjust.quantize(sample))
            .collect();
        Palette { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Writes one `R G B` line per entry.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for color in &self.colors {
            writeln!(writer, "{}", color)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reads whitespace-separated `R G B` triples until end of input.
    ///
    /// Line breaks carry no meaning beyond separating tokens. Fails on a token
    /// that is not an integer in 0..=255 or on a trailing partial triple.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut colors = Vec::new();
        let mut pending: Vec<u8> = Vec::with_capacity(3);

        for (line_index, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_index + 1))?;
            for token in line.split_whitespace() {
                let component: u8 = token.parse().map_err(|e| {
                    anyhow!(
                        "Invalid color component '{}' on line {}: {}",
                        token,
                        line_index + 1,
                        e
                    )
                })?;
                pending.push(component);
                if pending.len() == 3 {
                    colors.push(Rgb(pending[0], pending[1], pending[2]));
                    pending.clear();
                }
            }
        }

        if !pending.is_empty() {
            bail!(
                "Palette ends with an incomplete color ({} of 3 components)",
                pending.len()
            );
        }
        Ok(Palette { colors })
    }

    /// Path of the file holding palette `name` inside `dir`.
    pub fn file_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{}", name, PALETTE_EXTENSION))
    }

    /// Creates or truncates `<dir>/<name>.txt` and writes the palette to it.
    ///
    /// The file is flushed and closed before this returns.
    pub fn save(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let path = Palette::file_path(dir, name);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create palette file {}", path.display()))?;
        self.write_to(BufWriter::new(file))
            .with_context(|| format!("Failed to write palette file {}", path.display()))?;
        debug!("Palette: wrote {} entries to {}", self.len(), path.display());
        Ok(path)
    }

    /// Reads a palette file written by `save`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Can't open palette file {}", path.display()))?;
        Palette::read_from(std::io::BufReader::new(file))
            .with_context(|| format!("Failed to parse palette file {}", path.display()))
    }
}
