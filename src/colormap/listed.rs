// src/colormap/listed.rs

//! Colormaps defined by a fixed list of colors with no blending between them.

use super::{clamp_position, Colormap};
use crate::color::ColorSample;

/// A list of colors picked by nearest-lower lookup.
///
/// Position `x` selects entry `floor(x * n)`, with `x == 1.0` folded onto the
/// last entry, so every entry covers an equal share of [0, 1].
#[derive(Debug, Clone)]
pub struct Listed {
    colors: Vec<ColorSample>,
}

impl Listed {
    pub fn new(colors: Vec<ColorSample>) -> Self {
        Listed { colors }
    }

    /// Builds a list from packed `0xRRGGBB` values.
    pub fn from_hex(hex: &[u32]) -> Self {
        Listed::new(hex.iter().copied().map(ColorSample::from_hex).collect())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Colormap for Listed {
    fn at(&self, position: f64) -> ColorSample {
        let n = self.colors.len();
        if n == 0 {
            return ColorSample::rgb(0.0, 0.0, 0.0);
        }
        let index = (clamp_position(position) * n as f64) as usize;
        self.colors[index.min(n - 1)]
    }
}
