// src/colormap.rs

//! Colormaps and the discretized view the palette builder samples from.
//!
//! A `Colormap` maps a normalized position in [0, 1] to a color. A
//! `SampledColormap` pins a colormap to exactly `n` evenly spaced sample
//! points, so index 0 lands on position 0.0 and index `n - 1` on 1.0.
//! `ColormapResolver` is the seam between the generator and wherever
//! colormaps come from; `registry::Registry` is the built-in implementation.

pub mod formula;
pub mod listed;
pub mod registry;
pub mod segmented;

#[cfg(test)]
mod tests;

use anyhow::{bail, Result};
use std::fmt;

use crate::color::ColorSample;

/// A continuous mapping from a normalized position to a color.
pub trait Colormap {
    /// Evaluates the colormap at `position`. Positions outside [0, 1] are
    /// clamped to the nearest endpoint.
    fn at(&self, position: f64) -> ColorSample;
}

impl<F> Colormap for F
where
    F: Fn(f64) -> ColorSample,
{
    fn at(&self, position: f64) -> ColorSample {
        self(position)
    }
}

/// A colormap discretized to a fixed number of samples.
pub struct SampledColormap {
    name: String,
    sample_count: usize,
    colormap: Box<dyn Colormap>,
}

impl fmt::Debug for SampledColormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampledColormap")
            .field("name", &self.name)
            .field("sample_count", &self.sample_count)
            .finish_non_exhaustive()
    }
}

impl SampledColormap {
    pub fn new(
        name: impl Into<String>,
        colormap: Box<dyn Colormap>,
        sample_count: usize,
    ) -> Result<Self> {
        let name = name.into();
        if sample_count == 0 {
            bail!("colormap '{}' requested with zero samples", name);
        }
        Ok(SampledColormap {
            name,
            sample_count,
            colormap,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Normalized position of sample `index`.
    ///
    /// Endpoints are exact: 0 maps to 0.0 and `sample_count - 1` to 1.0.
    /// A single-sample colormap is evaluated at 0.0.
    pub fn position(&self, index: usize) -> f64 {
        if self.sample_count == 1 {
            return 0.0;
        }
        index as f64 / (self.sample_count - 1) as f64
    }

    /// The color at sample `index`.
    pub fn color(&self, index: usize) -> Result<ColorSample> {
        if index >= self.sample_count {
            bail!(
                "sample index {} out of range for colormap '{}' with {} samples",
                index,
                self.name,
                self.sample_count
            );
        }
        Ok(self.colormap.at(self.position(index)))
    }

    /// Every sample, in index order.
    pub fn samples(&self) -> impl Iterator<Item = ColorSample> + '_ {
        (0..self.sample_count).map(move |index| self.colormap.at(self.position(index)))
    }
}

/// Resolves a colormap name to a discretized colormap.
pub trait ColormapResolver {
    /// Fails when `name` is unknown or `sample_count` is zero.
    fn resolve(&self, name: &str, sample_count: usize) -> Result<SampledColormap>;
}

impl<R: ColormapResolver + ?Sized> ColormapResolver for &R {
    fn resolve(&self, name: &str, sample_count: usize) -> Result<SampledColormap> {
        (**self).resolve(name, sample_count)
    }
}

/// Clamps a position into [0, 1]; NaN collapses to 0.
pub(crate) fn clamp_position(position: f64) -> f64 {
    if position.is_nan() {
        return 0.0;
    }
    position.clamp(0.0, 1.0)
}
