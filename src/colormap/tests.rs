// src/colormap/tests.rs

use super::registry::Registry;
use super::*;
use crate::color::{ChannelAdjust, ColorSample, Rgb};
use test_log::test;

fn assert_close(actual: ColorSample, expected: (f64, f64, f64)) {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert!(
        close(actual.r, expected.0) && close(actual.g, expected.1) && close(actual.b, expected.2),
        "{:?} != {:?}",
        actual,
        expected
    );
}

fn gradient_stub() -> Box<dyn Colormap> {
    Box::new(|x: f64| ColorSample::rgb(x, 1.0 - x, 0.5))
}

#[test]
fn positions_hit_domain_endpoints_exactly() {
    let sampled = SampledColormap::new("stub", gradient_stub(), 2048).unwrap();
    assert_eq!(sampled.position(0), 0.0);
    assert_eq!(sampled.position(2047), 1.0);
    assert!((sampled.position(1) - 1.0 / 2047.0).abs() < 1e-15);
}

#[test]
fn colors_come_from_the_underlying_colormap() {
    let sampled = SampledColormap::new("stub", gradient_stub(), 5).unwrap();
    assert_eq!(sampled.color(0).unwrap(), ColorSample::rgb(0.0, 1.0, 0.5));
    assert_eq!(sampled.color(2).unwrap(), ColorSample::rgb(0.5, 0.5, 0.5));
    assert_eq!(sampled.color(4).unwrap(), ColorSample::rgb(1.0, 0.0, 0.5));
}

#[test]
fn samples_iterate_in_index_order() {
    let sampled = SampledColormap::new("stub", gradient_stub(), 3).unwrap();
    let reds: Vec<f64> = sampled.samples().map(|c| c.r).collect();
    assert_eq!(reds, vec![0.0, 0.5, 1.0]);
}

#[test]
fn out_of_range_index_is_an_error() {
    let sampled = SampledColormap::new("stub", gradient_stub(), 3).unwrap();
    let err = sampled.color(3).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{}", err);
}

#[test]
fn zero_samples_is_rejected() {
    let err = SampledColormap::new("stub", gradient_stub(), 0).unwrap_err();
    assert!(err.to_string().contains("zero samples"), "{}", err);
}

#[test]
fn single_sample_evaluates_the_start() {
    let sampled = SampledColormap::new("stub", gradient_stub(), 1).unwrap();
    assert_eq!(sampled.position(0), 0.0);
    assert_eq!(sampled.samples().count(), 1);
}

#[test]
fn registry_rejects_unknown_names() {
    let err = Registry.resolve("not_a_colormap", 2048).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Unknown colormap 'not_a_colormap'"), "{}", message);
    assert!(message.contains("viridis"), "{}", message);
}

#[test]
fn registry_names_are_case_sensitive() {
    assert!(Registry::contains("Blues"));
    assert!(!Registry::contains("blues"));
    assert!(Registry.resolve("blues", 16).is_err());
}

#[test]
fn registry_names_are_unique() {
    let names = Registry::supported();
    let unique: std::collections::HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn plotting_library_names_resolve() {
    let names = [
        "viridis", "plasma", "inferno", "magma", "cividis", "Greys", "Purples", "Blues",
        "Greens", "Oranges", "Reds", "YlOrBr", "YlOrRd", "OrRd", "PuRd", "RdPu", "BuPu",
        "GnBu", "PuBu", "YlGnBu", "PuBuGn", "BuGn", "YlGn", "binary", "gist_yarg",
        "gist_gray", "gray", "bone", "pink", "spring", "summer", "autumn", "winter", "cool",
        "Wistia", "hot", "afmhot", "gist_heat", "copper", "PiYG", "PRGn", "BrBG", "PuOr",
        "RdGy", "RdBu", "RdYlBu", "RdYlGn", "Spectral", "bwr", "seismic", "hsv", "Pastel1",
        "Pastel2", "Paired", "Accent", "Dark2", "Set1", "Set2", "Set3", "tab10", "tab20",
        "tab20b", "tab20c", "flag", "prism", "ocean", "terrain", "gist_stern", "gnuplot",
        "gnuplot2", "CMRmap", "cubehelix", "brg", "gist_rainbow", "rainbow", "jet", "turbo",
        "nipy_spectral",
    ];
    for name in names {
        assert!(Registry::contains(name), "{}", name);
    }
    assert_eq!(Registry::supported().len(), names.len());
}

#[test]
fn every_supported_colormap_resolves_in_range() {
    for name in Registry::supported() {
        let sampled = Registry.resolve(name, 2048).unwrap();
        assert_eq!(sampled.name(), name);
        assert_eq!(sampled.sample_count(), 2048);
        for (i, c) in sampled.samples().enumerate() {
            for v in c.channels() {
                assert!((0.0..=1.0).contains(&v), "{}[{}] = {:?}", name, i, c);
            }
        }
    }
}

#[test]
fn grayscale_maps_run_between_black_and_white() {
    let gray = Registry.resolve("gray", 2048).unwrap();
    assert_eq!(gray.color(0).unwrap(), ColorSample::rgb(0.0, 0.0, 0.0));
    assert_eq!(gray.color(2047).unwrap(), ColorSample::rgb(1.0, 1.0, 1.0));

    let binary = Registry.resolve("binary", 2048).unwrap();
    assert_eq!(binary.color(0).unwrap(), ColorSample::rgb(1.0, 1.0, 1.0));
    assert_eq!(binary.color(2047).unwrap(), ColorSample::rgb(0.0, 0.0, 0.0));
}

#[test]
fn jet_starts_dark_blue_and_ends_dark_red() {
    let jet = Registry.resolve("jet", 2048).unwrap();
    assert_eq!(jet.color(0).unwrap(), ColorSample::rgb(0.0, 0.0, 0.5));
    assert_eq!(jet.color(2047).unwrap(), ColorSample::rgb(0.5, 0.0, 0.0));
}

#[test]
fn qualitative_maps_keep_their_first_and_last_entries() {
    let tab10 = Registry.resolve("tab10", 2048).unwrap();
    assert_eq!(tab10.color(0).unwrap(), ColorSample::from_hex(0x1f77b4));
    assert_eq!(tab10.color(2047).unwrap(), ColorSample::from_hex(0x17becf));
}

#[test]
fn resolver_works_through_a_reference() {
    fn resolve_with(resolver: impl ColormapResolver) -> usize {
        resolver.resolve("viridis", 8).unwrap().sample_count()
    }
    let registry = Registry;
    assert_eq!(resolve_with(&registry), 8);
}

#[test]
fn colorbrewer_maps_blend_linearly_between_stops() {
    let blues = Registry.resolve("Blues", 17).unwrap();
    let first = ColorSample::from_hex(0xf7fbff);
    let second = ColorSample::from_hex(0xdeebf7);
    assert_close(
        blues.color(1).unwrap(),
        (
            (first.r + second.r) / 2.0,
            (first.g + second.g) / 2.0,
            (first.b + second.b) / 2.0,
        ),
    );

    let adjust = ChannelAdjust::default();
    assert_eq!(adjust.quantize(blues.color(0).unwrap()), Rgb(247, 225, 229));
    assert_eq!(adjust.quantize(blues.color(16).unwrap()), Rgb(8, 43, 96));
}

#[test]
fn puor_runs_from_orange_to_purple() {
    let puor = Registry.resolve("PuOr", 2048).unwrap();
    let adjust = ChannelAdjust::default();
    assert_eq!(adjust.quantize(puor.color(0).unwrap()), Rgb(127, 53, 7));
    assert_eq!(adjust.quantize(puor.color(2047).unwrap()), Rgb(45, 0, 67));
}

#[test]
fn tab20_variants_keep_their_first_and_last_entries() {
    let tab20b = Registry.resolve("tab20b", 2048).unwrap();
    assert_eq!(tab20b.color(0).unwrap(), ColorSample::from_hex(0x393b79));
    assert_eq!(tab20b.color(2047).unwrap(), ColorSample::from_hex(0xde9ed6));

    let tab20c = Registry.resolve("tab20c", 2048).unwrap();
    assert_eq!(tab20c.color(0).unwrap(), ColorSample::from_hex(0x3182bd));
    assert_eq!(tab20c.color(2047).unwrap(), ColorSample::from_hex(0xd9d9d9));
}

#[test]
fn pink_mixes_gray_and_hot_under_a_square_root() {
    let pink = Registry.resolve("pink", 2048).unwrap();
    assert_close(pink.color(0).unwrap(), ((0.0416f64 / 3.0).sqrt(), 0.0, 0.0));
    assert_close(pink.color(2047).unwrap(), (1.0, 1.0, 1.0));
}

#[test]
fn gist_stern_steps_its_red_channel() {
    let stern = Registry.resolve("gist_stern", 5).unwrap();
    assert_close(stern.color(0).unwrap(), (0.0, 0.0, 0.0));
    // Left of the step at 0.25 red is nearly off.
    assert_close(stern.color(1).unwrap(), (0.027, 0.25, 0.5));
    assert_close(stern.color(2).unwrap(), (0.5, 0.5, 1.0));
    assert_close(stern.color(4).unwrap(), (1.0, 1.0, 1.0));
}

#[test]
fn gist_rainbow_and_nipy_spectral_endpoints() {
    let rainbow = Registry.resolve("gist_rainbow", 2048).unwrap();
    assert_close(rainbow.color(0).unwrap(), (1.0, 0.0, 0.16));
    assert_close(rainbow.color(2047).unwrap(), (1.0, 0.0, 0.75));

    let spectral = Registry.resolve("nipy_spectral", 6).unwrap();
    assert_close(spectral.color(0).unwrap(), (0.0, 0.0, 0.0));
    assert_close(spectral.color(3).unwrap(), (0.0, 1.0, 0.0));
    assert_close(spectral.color(5).unwrap(), (0.8, 0.8, 0.8));
}
