// src/colormap/registry.rs

//! The built-in colormap registry.
//!
//! Names follow the usual plotting-library spelling (case-sensitive). The
//! perceptual family comes from `colorgrad` presets; everything else is
//! defined here from its channel data.

use anyhow::{bail, Result};
use colorgrad::Gradient;
use log::trace;
use once_cell::sync::Lazy;

use super::formula::{self, Cubehelix, Formula};
use super::listed::Listed;
use super::segmented::{Anchor, Segmented};
use super::{clamp_position, Colormap, ColormapResolver, SampledColormap};
use crate::color::ColorSample;

type Builder = fn() -> Box<dyn Colormap>;

/// Plain float RGB, for colormaps defined by a color list.
type FloatRgb = (f64, f64, f64);

struct Entry {
    name: &'static str,
    build: Builder,
}

/// Resolves names against the compiled-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    /// Every name this registry resolves, in table order.
    pub fn supported() -> Vec<&'static str> {
        ENTRIES.iter().map(|entry| entry.name).collect()
    }

    pub fn contains(name: &str) -> bool {
        ENTRIES.iter().any(|entry| entry.name == name)
    }
}

impl ColormapResolver for Registry {
    fn resolve(&self, name: &str, sample_count: usize) -> Result<SampledColormap> {
        let entry = match ENTRIES.iter().find(|entry| entry.name == name) {
            Some(entry) => entry,
            None => bail!(
                "Unknown colormap '{}'. Supported: {}",
                name,
                Registry::supported().join(", ")
            ),
        };
        trace!("Registry: resolved '{}' at {} samples", name, sample_count);
        SampledColormap::new(name, (entry.build)(), sample_count)
    }
}

/// Adapts a `colorgrad` gradient, mapping [0, 1] onto the gradient's domain.
struct Preset<G>(G);

impl<G: Gradient> Colormap for Preset<G> {
    fn at(&self, position: f64) -> ColorSample {
        let (lo, hi) = self.0.domain();
        let t = lo + clamp_position(position) as f32 * (hi - lo);
        let c = Gradient::at(&self.0, t);
        ColorSample {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
        .clamped()
    }
}

fn gradient<G: Gradient + 'static>(gradient: G) -> Box<dyn Colormap> {
    Box::new(Preset(gradient))
}

fn boxed<C: Colormap + 'static>(colormap: C) -> Box<dyn Colormap> {
    Box::new(colormap)
}

fn segmented(red: &[Anchor], green: &[Anchor], blue: &[Anchor]) -> Box<dyn Colormap> {
    boxed(Segmented::from_anchors(red, green, blue))
}

fn blend(colors: &[FloatRgb]) -> Box<dyn Colormap> {
    let colors: Vec<ColorSample> = colors
        .iter()
        .map(|&(r, g, b)| ColorSample::rgb(r, g, b))
        .collect();
    boxed(Segmented::from_colors(&colors))
}

fn blend_hex(hex: &[u32]) -> Box<dyn Colormap> {
    let colors: Vec<ColorSample> = hex.iter().copied().map(ColorSample::from_hex).collect();
    boxed(Segmented::from_colors(&colors))
}

fn listed(hex: &[u32]) -> Box<dyn Colormap> {
    boxed(Listed::from_hex(hex))
}

fn stops(stops: &[(f64, FloatRgb)]) -> Box<dyn Colormap> {
    let stops: Vec<(f64, ColorSample)> = stops
        .iter()
        .map(|&(x, (r, g, b))| (x, ColorSample::rgb(r, g, b)))
        .collect();
    boxed(Segmented::from_stops(&stops))
}

/// Continuous anchors for values taken at evenly spaced knots.
fn knots(values: &[f64]) -> Vec<Anchor> {
    let last = values.len().saturating_sub(1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64 / last, v, v))
        .collect()
}

fn nipy_spectral() -> Box<dyn Colormap> {
    boxed(Segmented::from_anchors(
        &knots(&NIPY_SPECTRAL_RED),
        &knots(&NIPY_SPECTRAL_GREEN),
        &knots(&NIPY_SPECTRAL_BLUE),
    ))
}

/// Sepia tones: `sqrt((2 * gray + hot) / 3)` per channel, tabulated at 64
/// knots and blended linearly between them.
fn pink() -> Box<dyn Colormap> {
    const KNOTS: usize = 64;
    let hot = Segmented::from_anchors(HOT_RED, HOT_GREEN, HOT_BLUE);
    let mut channels: [Vec<f64>; 3] = Default::default();
    for k in 0..KNOTS {
        let x = k as f64 / (KNOTS - 1) as f64;
        for (channel, heat) in channels.iter_mut().zip(hot.at(x).channels()) {
            channel.push(((2.0 * x + heat) / 3.0).sqrt());
        }
    }
    let [red, green, blue] = channels;
    boxed(Segmented::from_anchors(&knots(&red), &knots(&green), &knots(&blue)))
}

fn entry(name: &'static str, build: Builder) -> Entry {
    Entry { name, build }
}

// Channel data for the classic segmented maps.
const RAMP_UP: &[Anchor] = &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)];
const RAMP_DOWN: &[Anchor] = &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)];

const fn constant(value: f64) -> [Anchor; 2] {
    [(0.0, value, value), (1.0, value, value)]
}

const ZERO: [Anchor; 2] = constant(0.0);
const ONE: [Anchor; 2] = constant(1.0);

const BONE_RED: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.746032, 0.652778, 0.652778),
    (1.0, 1.0, 1.0),
];
const BONE_GREEN: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.365079, 0.319444, 0.319444),
    (0.746032, 0.777778, 0.777778),
    (1.0, 1.0, 1.0),
];
const BONE_BLUE: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.365079, 0.444444, 0.444444),
    (1.0, 1.0, 1.0),
];

const HOT_RED: &[Anchor] = &[
    (0.0, 0.0416, 0.0416),
    (0.365079, 1.0, 1.0),
    (1.0, 1.0, 1.0),
];
const HOT_GREEN: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.365079, 0.0, 0.0),
    (0.746032, 1.0, 1.0),
    (1.0, 1.0, 1.0),
];
const HOT_BLUE: &[Anchor] = &[(0.0, 0.0, 0.0), (0.746032, 0.0, 0.0), (1.0, 1.0, 1.0)];

const COPPER_RED: &[Anchor] = &[(0.0, 0.0, 0.0), (0.809524, 1.0, 1.0), (1.0, 1.0, 1.0)];
const COPPER_GREEN: &[Anchor] = &[(0.0, 0.0, 0.0), (1.0, 0.7812, 0.7812)];
const COPPER_BLUE: &[Anchor] = &[(0.0, 0.0, 0.0), (1.0, 0.4975, 0.4975)];

const SUMMER_GREEN: &[Anchor] = &[(0.0, 0.5, 0.5), (1.0, 1.0, 1.0)];
const WINTER_BLUE: &[Anchor] = &[(0.0, 1.0, 1.0), (1.0, 0.5, 0.5)];

const JET_RED: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.35, 0.0, 0.0),
    (0.66, 1.0, 1.0),
    (0.89, 1.0, 1.0),
    (1.0, 0.5, 0.5),
];
const JET_GREEN: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.125, 0.0, 0.0),
    (0.375, 1.0, 1.0),
    (0.64, 1.0, 1.0),
    (0.91, 0.0, 0.0),
    (1.0, 0.0, 0.0),
];
const JET_BLUE: &[Anchor] = &[
    (0.0, 0.5, 0.5),
    (0.11, 1.0, 1.0),
    (0.34, 1.0, 1.0),
    (0.65, 0.0, 0.0),
    (1.0, 0.0, 0.0),
];

const HSV_RED: &[Anchor] = &[
    (0.0, 1.0, 1.0),
    (0.158730, 1.0, 1.0),
    (0.174603, 0.968750, 0.968750),
    (0.333333, 0.031250, 0.031250),
    (0.349206, 0.0, 0.0),
    (0.666667, 0.0, 0.0),
    (0.682540, 0.031250, 0.031250),
    (0.841270, 0.968750, 0.968750),
    (0.857143, 1.0, 1.0),
    (1.0, 1.0, 1.0),
];
const HSV_GREEN: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.158730, 0.937500, 0.937500),
    (0.174603, 1.0, 1.0),
    (0.507937, 1.0, 1.0),
    (0.666667, 0.062500, 0.062500),
    (0.682540, 0.0, 0.0),
    (1.0, 0.0, 0.0),
];
const HSV_BLUE: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.333333, 0.0, 0.0),
    (0.349206, 0.062500, 0.062500),
    (0.507937, 1.0, 1.0),
    (0.841270, 1.0, 1.0),
    (0.857143, 0.937500, 0.937500),
    (1.0, 0.09375, 0.09375),
];

const TERRAIN: &[(f64, FloatRgb)] = &[
    (0.00, (0.2, 0.2, 0.6)),
    (0.15, (0.0, 0.6, 1.0)),
    (0.25, (0.0, 0.8, 0.4)),
    (0.50, (1.0, 1.0, 0.6)),
    (0.75, (0.5, 0.36, 0.33)),
    (1.00, (1.0, 1.0, 1.0)),
];

const CMRMAP: &[FloatRgb] = &[
    (0.0, 0.0, 0.0),
    (0.15, 0.15, 0.5),
    (0.3, 0.15, 0.75),
    (0.6, 0.2, 0.5),
    (1.0, 0.25, 0.15),
    (0.9, 0.5, 0.0),
    (0.9, 0.75, 0.1),
    (0.9, 0.9, 0.5),
    (1.0, 1.0, 1.0),
];

// Qualitative lists.
const PASTEL1: &[u32] = &[
    0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6, 0xffffcc, 0xe5d8bd, 0xfddaec, 0xf2f2f2,
];
const PASTEL2: &[u32] = &[
    0xb3e2cd, 0xfdcdac, 0xcbd5e8, 0xf4cae4, 0xe6f5c9, 0xfff2ae, 0xf1e2cc, 0xcccccc,
];
const PAIRED: &[u32] = &[
    0xa6cee3, 0x1f78b4, 0xb2df8a, 0x33a02c, 0xfb9a99, 0xe31a1c, 0xfdbf6f, 0xff7f00, 0xcab2d6,
    0x6a3d9a, 0xffff99, 0xb15928,
];
const ACCENT: &[u32] = &[
    0x7fc97f, 0xbeaed4, 0xfdc086, 0xffff99, 0x386cb0, 0xf0027f, 0xbf5b17, 0x666666,
];
const DARK2: &[u32] = &[
    0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e, 0xe6ab02, 0xa6761d, 0x666666,
];
const SET1: &[u32] = &[
    0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00, 0xffff33, 0xa65628, 0xf781bf, 0x999999,
];
const SET2: &[u32] = &[
    0x66c2a5, 0xfc8d62, 0x8da0cb, 0xe78ac3, 0xa6d854, 0xffd92f, 0xe5c494, 0xb3b3b3,
];
const SET3: &[u32] = &[
    0x8dd3c7, 0xffffb3, 0xbebada, 0xfb8072, 0x80b1d3, 0xfdb462, 0xb3de69, 0xfccde5, 0xd9d9d9,
    0xbc80bd, 0xccebc5, 0xffed6f,
];
const TAB10: &[u32] = &[
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22,
    0x17becf,
];
const TAB20: &[u32] = &[
    0x1f77b4, 0xaec7e8, 0xff7f0e, 0xffbb78, 0x2ca02c, 0x98df8a, 0xd62728, 0xff9896, 0x9467bd,
    0xc5b0d5, 0x8c564b, 0xc49c94, 0xe377c2, 0xf7b6d2, 0x7f7f7f, 0xc7c7c7, 0xbcbd22, 0xdbdb8d,
    0x17becf, 0x9edae5,
];

const TAB20B: &[u32] = &[
    0x393b79, 0x5254a3, 0x6b6ecf, 0x9c9ede, 0x637939, 0x8ca252, 0xb5cf6b, 0xcedb9c, 0x8c6d31,
    0xbd9e39, 0xe7ba52, 0xe7cb94, 0x843c39, 0xad494a, 0xd6616b, 0xe7969c, 0x7b4173, 0xa55194,
    0xce6dbd, 0xde9ed6,
];
const TAB20C: &[u32] = &[
    0x3182bd, 0x6baed6, 0x9ecae1, 0xc6dbef, 0xe6550d, 0xfd8d3c, 0xfdae6b, 0xfdd0a2, 0x31a354,
    0x74c476, 0xa1d99b, 0xc7e9c0, 0x756bb1, 0x9e9ac8, 0xbcbddc, 0xdadaeb, 0x636363, 0x969696,
    0xbdbdbd, 0xd9d9d9,
];

const GIST_STERN_RED: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.0547, 1.0, 1.0),
    (0.25, 0.027, 0.25),
    (1.0, 1.0, 1.0),
];
const GIST_STERN_BLUE: &[Anchor] = &[
    (0.0, 0.0, 0.0),
    (0.5, 1.0, 1.0),
    (0.735, 0.0, 0.0),
    (1.0, 1.0, 1.0),
];

const GIST_RAINBOW: &[(f64, FloatRgb)] = &[
    (0.000, (1.0, 0.0, 0.16)),
    (0.030, (1.0, 0.0, 0.0)),
    (0.215, (1.0, 1.0, 0.0)),
    (0.400, (0.0, 1.0, 0.0)),
    (0.586, (0.0, 1.0, 1.0)),
    (0.770, (0.0, 0.0, 1.0)),
    (0.954, (1.0, 0.0, 1.0)),
    (1.000, (1.0, 0.0, 0.75)),
];

// nipy_spectral is sampled every 0.05; one value per knot.
const NIPY_SPECTRAL_RED: [f64; 21] = [
    0.0, 0.4667, 0.5333, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.7333, 0.9333, 1.0,
    1.0, 1.0, 0.8667, 0.8, 0.8,
];
const NIPY_SPECTRAL_GREEN: [f64; 21] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.4667, 0.6, 0.6667, 0.6667, 0.6, 0.7333, 0.8667, 1.0, 1.0, 0.9333,
    0.8, 0.6, 0.0, 0.0, 0.0, 0.8,
];
const NIPY_SPECTRAL_BLUE: [f64; 21] = [
    0.0, 0.5333, 0.6, 0.6667, 0.8667, 0.8667, 0.8667, 0.6667, 0.5333, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8,
];

// ColorBrewer stops: nine per sequential map, eleven per diverging map.
const GREYS: &[u32] = &[
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
];
const PURPLES: &[u32] = &[
    0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f, 0x3f007d,
];
const BLUES: &[u32] = &[
    0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b,
];
const GREENS: &[u32] = &[
    0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b,
];
const ORANGES: &[u32] = &[
    0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603, 0x7f2704,
];
const REDS: &[u32] = &[
    0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d,
];
const YL_OR_BR: &[u32] = &[
    0xffffe5, 0xfff7bc, 0xfee391, 0xfec44f, 0xfe9929, 0xec7014, 0xcc4c02, 0x993404, 0x662506,
];
const YL_OR_RD: &[u32] = &[
    0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026,
];
const OR_RD: &[u32] = &[
    0xfff7ec, 0xfee8c8, 0xfdd49e, 0xfdbb84, 0xfc8d59, 0xef6548, 0xd7301f, 0xb30000, 0x7f0000,
];
const PU_RD: &[u32] = &[
    0xf7f4f9, 0xe7e1ef, 0xd4b9da, 0xc994c7, 0xdf65b0, 0xe7298a, 0xce1256, 0x980043, 0x67001f,
];
const RD_PU: &[u32] = &[
    0xfff7f3, 0xfde0dd, 0xfcc5c0, 0xfa9fb5, 0xf768a1, 0xdd3497, 0xae017e, 0x7a0177, 0x49006a,
];
const BU_PU: &[u32] = &[
    0xf7fcfd, 0xe0ecf4, 0xbfd3e6, 0x9ebcda, 0x8c96c6, 0x8c6bb1, 0x88419d, 0x810f7c, 0x4d004b,
];
const GN_BU: &[u32] = &[
    0xf7fcf0, 0xe0f3db, 0xccebc5, 0xa8ddb5, 0x7bccc4, 0x4eb3d3, 0x2b8cbe, 0x0868ac, 0x084081,
];
const PU_BU: &[u32] = &[
    0xfff7fb, 0xece7f2, 0xd0d1e6, 0xa6bddb, 0x74a9cf, 0x3690c0, 0x0570b0, 0x045a8d, 0x023858,
];
const YL_GN_BU: &[u32] = &[
    0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494, 0x081d58,
];
const PU_BU_GN: &[u32] = &[
    0xfff7fb, 0xece2f0, 0xd0d1e6, 0xa6bddb, 0x67a9cf, 0x3690c0, 0x02818a, 0x016c59, 0x014636,
];
const BU_GN: &[u32] = &[
    0xf7fcfd, 0xe5f5f9, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76, 0x238b45, 0x006d2c, 0x00441b,
];
const YL_GN: &[u32] = &[
    0xffffe5, 0xf7fcb9, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d, 0x238443, 0x006837, 0x004529,
];

const PI_YG: &[u32] = &[
    0x8e0152, 0xc51b7d, 0xde77ae, 0xf1b6da, 0xfde0ef, 0xf7f7f7, 0xe6f5d0, 0xb8e186, 0x7fbc41,
    0x4d9221, 0x276419,
];
const PR_GN: &[u32] = &[
    0x40004b, 0x762a83, 0x9970ab, 0xc2a5cf, 0xe7d4e8, 0xf7f7f7, 0xd9f0d3, 0xa6dba0, 0x5aae61,
    0x1b7837, 0x00441b,
];
const BR_BG: &[u32] = &[
    0x543005, 0x8c510a, 0xbf812d, 0xdfc27d, 0xf6e8c3, 0xf5f5f5, 0xc7eae5, 0x80cdc1, 0x35978f,
    0x01665e, 0x003c30,
];
const PU_OR: &[u32] = &[
    0x7f3b08, 0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xf7f7f7, 0xd8daeb, 0xb2abd2, 0x8073ac,
    0x542788, 0x2d004b,
];
const RD_GY: &[u32] = &[
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xffffff, 0xe0e0e0, 0xbababa, 0x878787,
    0x4d4d4d, 0x1a1a1a,
];
const RD_BU: &[u32] = &[
    0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de, 0x4393c3,
    0x2166ac, 0x053061,
];
const RD_YL_BU: &[u32] = &[
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee090, 0xffffbf, 0xe0f3f8, 0xabd9e9, 0x74add1,
    0x4575b4, 0x313695,
];
const RD_YL_GN: &[u32] = &[
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xd9ef8b, 0xa6d96a, 0x66bd63,
    0x1a9850, 0x006837,
];
const SPECTRAL: &[u32] = &[
    0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xe6f598, 0xabdda4, 0x66c2a5,
    0x3288bd, 0x5e4fa2,
];

static ENTRIES: Lazy<Vec<Entry>> = Lazy::new(|| {
    use colorgrad::preset;

    vec![
        // Perceptually uniform sequential.
        entry("viridis", || gradient(preset::viridis())),
        entry("plasma", || gradient(preset::plasma())),
        entry("inferno", || gradient(preset::inferno())),
        entry("magma", || gradient(preset::magma())),
        entry("cividis", || gradient(preset::cividis())),
        entry("turbo", || gradient(preset::turbo())),
        // Sequential.
        entry("Greys", || blend_hex(GREYS)),
        entry("Purples", || blend_hex(PURPLES)),
        entry("Blues", || blend_hex(BLUES)),
        entry("Greens", || blend_hex(GREENS)),
        entry("Oranges", || blend_hex(ORANGES)),
        entry("Reds", || blend_hex(REDS)),
        entry("YlOrBr", || blend_hex(YL_OR_BR)),
        entry("YlOrRd", || blend_hex(YL_OR_RD)),
        entry("OrRd", || blend_hex(OR_RD)),
        entry("PuRd", || blend_hex(PU_RD)),
        entry("RdPu", || blend_hex(RD_PU)),
        entry("BuPu", || blend_hex(BU_PU)),
        entry("GnBu", || blend_hex(GN_BU)),
        entry("PuBu", || blend_hex(PU_BU)),
        entry("YlGnBu", || blend_hex(YL_GN_BU)),
        entry("PuBuGn", || blend_hex(PU_BU_GN)),
        entry("BuGn", || blend_hex(BU_GN)),
        entry("YlGn", || blend_hex(YL_GN)),
        // Sequential, classic.
        entry("binary", || segmented(RAMP_DOWN, RAMP_DOWN, RAMP_DOWN)),
        entry("gist_yarg", || segmented(RAMP_DOWN, RAMP_DOWN, RAMP_DOWN)),
        entry("gist_gray", || segmented(RAMP_UP, RAMP_UP, RAMP_UP)),
        entry("gray", || segmented(RAMP_UP, RAMP_UP, RAMP_UP)),
        entry("bone", || segmented(BONE_RED, BONE_GREEN, BONE_BLUE)),
        entry("pink", pink),
        entry("spring", || segmented(&ONE, RAMP_UP, RAMP_DOWN)),
        entry("summer", || segmented(RAMP_UP, SUMMER_GREEN, &constant(0.4))),
        entry("autumn", || segmented(&ONE, RAMP_UP, &ZERO)),
        entry("winter", || segmented(&ZERO, RAMP_UP, WINTER_BLUE)),
        entry("cool", || segmented(RAMP_UP, RAMP_DOWN, &ONE)),
        entry("Wistia", || {
            blend_hex(&[0xe4ff7a, 0xffe81a, 0xffbd00, 0xffa000, 0xfc7f00])
        }),
        entry("hot", || segmented(HOT_RED, HOT_GREEN, HOT_BLUE)),
        entry("afmhot", || boxed(Formula::gnuplot(34, 35, 36))),
        entry("gist_heat", || boxed(formula::gist_heat())),
        entry("copper", || segmented(COPPER_RED, COPPER_GREEN, COPPER_BLUE)),
        // Diverging.
        entry("PiYG", || blend_hex(PI_YG)),
        entry("PRGn", || blend_hex(PR_GN)),
        entry("BrBG", || blend_hex(BR_BG)),
        entry("PuOr", || blend_hex(PU_OR)),
        entry("RdGy", || blend_hex(RD_GY)),
        entry("RdBu", || blend_hex(RD_BU)),
        entry("RdYlBu", || blend_hex(RD_YL_BU)),
        entry("RdYlGn", || blend_hex(RD_YL_GN)),
        entry("Spectral", || blend_hex(SPECTRAL)),
        entry("bwr", || blend(&[(0.0, 0.0, 1.0), (1.0, 1.0, 1.0), (1.0, 0.0, 0.0)])),
        entry("seismic", || {
            blend(&[
                (0.0, 0.0, 0.3),
                (0.0, 0.0, 1.0),
                (1.0, 1.0, 1.0),
                (1.0, 0.0, 0.0),
                (0.5, 0.0, 0.0),
            ])
        }),
        // Cyclic.
        entry("hsv", || segmented(HSV_RED, HSV_GREEN, HSV_BLUE)),
        // Qualitative.
        entry("Pastel1", || listed(PASTEL1)),
        entry("Pastel2", || listed(PASTEL2)),
        entry("Paired", || listed(PAIRED)),
        entry("Accent", || listed(ACCENT)),
        entry("Dark2", || listed(DARK2)),
        entry("Set1", || listed(SET1)),
        entry("Set2", || listed(SET2)),
        entry("Set3", || listed(SET3)),
        entry("tab10", || listed(TAB10)),
        entry("tab20", || listed(TAB20)),
        entry("tab20b", || listed(TAB20B)),
        entry("tab20c", || listed(TAB20C)),
        // Miscellaneous.
        entry("flag", || boxed(formula::flag())),
        entry("prism", || boxed(formula::prism())),
        entry("ocean", || boxed(Formula::gnuplot(23, 28, 3))),
        entry("terrain", || stops(TERRAIN)),
        entry("gist_stern", || segmented(GIST_STERN_RED, RAMP_UP, GIST_STERN_BLUE)),
        entry("gnuplot", || boxed(Formula::gnuplot(7, 5, 15))),
        entry("gnuplot2", || boxed(Formula::gnuplot(30, 31, 32))),
        entry("CMRmap", || blend(CMRMAP)),
        entry("cubehelix", || boxed(Cubehelix::default())),
        entry("brg", || blend(&[(0.0, 0.0, 1.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)])),
        entry("gist_rainbow", || stops(GIST_RAINBOW)),
        entry("rainbow", || boxed(Formula::gnuplot(33, 13, 10))),
        entry("jet", || segmented(JET_RED, JET_GREEN, JET_BLUE)),
        entry("nipy_spectral", nipy_spectral),
    ]
});
