// src/lib.rs

//! Precomputes color palette lookup tables from named colormaps.
//!
//! Each configured colormap is sampled at evenly spaced positions, tinted per
//! channel, quantized to 8 bits and written as a text file of `R G B` lines.

pub mod color;
pub mod colormap;
pub mod config;
pub mod generator;
pub mod palette;

#[cfg(test)]
mod test_support;

pub use color::{ChannelAdjust, ColorSample, Rgb};
pub use colormap::{registry::Registry, Colormap, ColormapResolver, SampledColormap};
pub use config::Config;
pub use generator::{GenerationReport, PaletteGenerator};
pub use palette::Palette;
