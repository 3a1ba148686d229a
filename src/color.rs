// src/color.rs

//! Color value types shared by the colormaps and the palette writer.
//!
//! Colormaps produce floating point `ColorSample`s with channels in [0, 1].
//! Palettes hold integer `Rgb` triples. `ChannelAdjust` is the single step
//! between the two: a per-channel tint followed by quantization to a byte.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color as returned by a colormap, channels nominally in [0, 1].
///
/// Alpha is carried so colormaps can return what their source data holds,
/// but nothing downstream of sampling reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorSample {
    /// An opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        ColorSample { r, g, b, a: 1.0 }
    }

    /// An opaque color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f64 / 255.0;
        ColorSample::rgb(channel(16), channel(8), channel(0))
    }

    /// Clips every channel into [0, 1].
    pub fn clamped(self) -> Self {
        ColorSample {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// The first three channels, in order.
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// An 8-bit RGB triple, one palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    /// Formats as the palette file line body: `R G B`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0, self.1, self.2)
    }
}

/// Static per-channel multiplier applied to a sample before quantization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelAdjust(pub [f64; 3]);

impl Default for ChannelAdjust {
    /// Full red, green and blue pulled down to 90%.
    fn default() -> Self {
        ChannelAdjust([1.0, 0.9, 0.9])
    }
}

impl ChannelAdjust {
    /// Leaves every channel untouched.
    pub const IDENTITY: ChannelAdjust = ChannelAdjust([1.0, 1.0, 1.0]);

    /// Scales the first three channels of `sample` by this adjustment and by
    /// 255, truncating each toward zero.
    pub fn quantize(&self, sample: ColorSample) -> Rgb {
        let [r, g, b] = sample.channels();
        Rgb(
            quantize_channel(r, self.0[0]),
            quantize_channel(g, self.0[1]),
            quantize_channel(b, self.0[2]),
        )
    }

    /// The largest triple this adjustment can produce from an in-range sample.
    pub fn ceiling(&self) -> Rgb {
        self.quantize(ColorSample::rgb(1.0, 1.0, 1.0))
    }
}

// `as` saturates out-of-range floats and maps NaN to 0.
fn quantize_channel(value: f64, adjust: f64) -> u8 {
    (value * adjust * 255.0).trunc() as u8
}
