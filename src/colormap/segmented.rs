// src/colormap/segmented.rs

//! Per-channel piecewise-linear colormaps.
//!
//! Each channel is described by anchors `(x, below, above)`: `below` is the
//! value approached from the left of `x`, `above` the value leaving it to the
//! right. Equal `below`/`above` gives a continuous channel; differing values
//! give a step. Anchors are sorted by `x`, start at 0.0 and end at 1.0.

use super::{clamp_position, Colormap};
use crate::color::ColorSample;

/// One channel anchor: position, value from the left, value to the right.
pub type Anchor = (f64, f64, f64);

#[derive(Debug, Clone)]
pub struct Segmented {
    red: Vec<Anchor>,
    green: Vec<Anchor>,
    blue: Vec<Anchor>,
}

impl Segmented {
    pub fn from_anchors(red: &[Anchor], green: &[Anchor], blue: &[Anchor]) -> Self {
        Segmented {
            red: red.to_vec(),
            green: green.to_vec(),
            blue: blue.to_vec(),
        }
    }

    /// Linear blend through `colors`, spaced evenly over [0, 1].
    pub fn from_colors(colors: &[ColorSample]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        let stops: Vec<(f64, ColorSample)> = colors
            .iter()
            .enumerate()
            .map(|(i, color)| (i as f64 / last, *color))
            .collect();
        Segmented::from_stops(&stops)
    }

    /// Linear blend through `(position, color)` stops.
    pub fn from_stops(stops: &[(f64, ColorSample)]) -> Self {
        let channel = |pick: fn(&ColorSample) -> f64| -> Vec<Anchor> {
            stops
                .iter()
                .map(|(x, color)| (*x, pick(color), pick(color)))
                .collect()
        };
        Segmented {
            red: channel(|c| c.r),
            green: channel(|c| c.g),
            blue: channel(|c| c.b),
        }
    }
}

impl Colormap for Segmented {
    fn at(&self, position: f64) -> ColorSample {
        let x = clamp_position(position);
        ColorSample::rgb(
            interpolate(&self.red, x),
            interpolate(&self.green, x),
            interpolate(&self.blue, x),
        )
        .clamped()
    }
}

/// Evaluates one channel at `x`. At an interior anchor the left-hand value wins.
fn interpolate(anchors: &[Anchor], x: f64) -> f64 {
    let (first, last) = match (anchors.first(), anchors.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };
    if x <= first.0 {
        return first.2;
    }
    if x >= last.0 {
        return last.1;
    }

    let upper = anchors
        .iter()
        .position(|anchor| anchor.0 >= x)
        .unwrap_or(anchors.len() - 1);
    let (x0, _, from) = anchors[upper - 1];
    let (x1, to, _) = anchors[upper];
    if x1 <= x0 {
        return to;
    }
    from + (x - x0) / (x1 - x0) * (to - from)
}
