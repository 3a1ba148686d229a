// src/colormap/formula.rs

//! Colormaps whose channels are closed-form functions of the position.
//!
//! Channel results are clipped to [0, 1], so formulas are free to overshoot.

use std::f64::consts::PI;

use super::{clamp_position, Colormap};
use crate::color::ColorSample;

/// A single channel as a function of position.
pub type ChannelFn = fn(f64) -> f64;

/// A colormap built from one function per channel.
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    red: ChannelFn,
    green: ChannelFn,
    blue: ChannelFn,
}

impl Formula {
    pub const fn new(red: ChannelFn, green: ChannelFn, blue: ChannelFn) -> Self {
        Formula { red, green, blue }
    }

    /// A colormap from three numbered gnuplot `rgbformulae` entries.
    ///
    /// Numbers outside 0..=36 yield a zero channel.
    pub fn gnuplot(red: u8, green: u8, blue: u8) -> Self {
        Formula::new(gnuplot_fn(red), gnuplot_fn(green), gnuplot_fn(blue))
    }
}

impl Colormap for Formula {
    fn at(&self, position: f64) -> ColorSample {
        let x = clamp_position(position);
        ColorSample::rgb((self.red)(x), (self.green)(x), (self.blue)(x)).clamped()
    }
}

/// The gnuplot palette function table.
pub fn gnuplot_fn(number: u8) -> ChannelFn {
    match number {
        0 => |_| 0.0,
        1 => |_| 0.5,
        2 => |_| 1.0,
        3 => |x| x,
        4 => |x| x.powi(2),
        5 => |x| x.powi(3),
        6 => |x| x.powi(4),
        7 => |x| x.sqrt(),
        8 => |x| x.sqrt().sqrt(),
        9 => |x| (x * PI / 2.0).sin(),
        10 => |x| (x * PI / 2.0).cos(),
        11 => |x| (x - 0.5).abs(),
        12 => |x| (2.0 * x - 1.0).powi(2),
        13 => |x| (x * PI).sin(),
        14 => |x| (x * PI).cos().abs(),
        15 => |x| (x * 2.0 * PI).sin(),
        16 => |x| (x * 2.0 * PI).cos(),
        17 => |x| (x * 2.0 * PI).sin().abs(),
        18 => |x| (x * 2.0 * PI).cos().abs(),
        19 => |x| (x * 4.0 * PI).sin().abs(),
        20 => |x| (x * 4.0 * PI).cos().abs(),
        21 => |x| 3.0 * x,
        22 => |x| 3.0 * x - 1.0,
        23 => |x| 3.0 * x - 2.0,
        24 => |x| (3.0 * x - 1.0).abs(),
        25 => |x| (3.0 * x - 2.0).abs(),
        26 => |x| (3.0 * x - 1.0) / 2.0,
        27 => |x| (3.0 * x - 2.0) / 2.0,
        28 => |x| ((3.0 * x - 1.0) / 2.0).abs(),
        29 => |x| ((3.0 * x - 2.0) / 2.0).abs(),
        30 => |x| x / 0.32 - 0.78125,
        31 => |x| 2.0 * x - 0.84,
        32 => |x| {
            if x < 0.25 {
                4.0 * x
            } else if x < 0.92 {
                -2.0 * x + 1.84
            } else {
                x / 0.08 - 11.5
            }
        },
        33 => |x| (2.0 * x - 0.5).abs(),
        34 => |x| 2.0 * x,
        35 => |x| 2.0 * x - 0.5,
        36 => |x| 2.0 * x - 1.0,
        _ => |_| 0.0,
    }
}

/// Repeating red, white, blue and black bands.
pub fn flag() -> Formula {
    Formula::new(
        |x| 0.75 * ((x * 31.5 + 0.25) * PI).sin() + 0.5,
        |x| (x * 31.5 * PI).sin(),
        |x| 0.75 * ((x * 31.5 - 0.25) * PI).sin() + 0.5,
    )
}

pub fn prism() -> Formula {
    Formula::new(
        |x| 0.75 * ((x * 20.9 + 0.25) * PI).sin() + 0.67,
        |x| 0.75 * ((x * 20.9 - 0.25) * PI).sin() + 0.33,
        |x| -1.1 * (x * 20.9 * PI).sin(),
    )
}

pub fn gist_heat() -> Formula {
    Formula::new(|x| 1.5 * x, |x| 2.0 * x - 1.0, |x| 4.0 * x - 3.0)
}

/// Green's cubehelix scheme: a helix around the grey diagonal of the RGB cube
/// with monotonically increasing perceived intensity.
#[derive(Debug, Clone, Copy)]
pub struct Cubehelix {
    /// Intensity exponent.
    pub gamma: f64,
    /// Starting hue, in thirds of a turn.
    pub start: f64,
    /// Number of turns from start to end.
    pub rotation: f64,
    /// Saturation.
    pub hue: f64,
}

impl Default for Cubehelix {
    fn default() -> Self {
        Cubehelix {
            gamma: 1.0,
            start: 0.5,
            rotation: -1.5,
            hue: 1.0,
        }
    }
}

impl Cubehelix {
    fn channel(&self, x: f64, p0: f64, p1: f64) -> f64 {
        let xg = x.powf(self.gamma);
        let amplitude = self.hue * xg * (1.0 - xg) / 2.0;
        let phi = 2.0 * PI * (self.start / 3.0 + self.rotation * x);
        xg + amplitude * (p0 * phi.cos() + p1 * phi.sin())
    }
}

impl Colormap for Cubehelix {
    fn at(&self, position: f64) -> ColorSample {
        let x = clamp_position(position);
        ColorSample::rgb(
            self.channel(x, -0.14861, 1.78277),
            self.channel(x, -0.29227, -0.90649),
            self.channel(x, 1.97294, 0.0),
        )
        .clamped()
    }
}
