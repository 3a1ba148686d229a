// src/palette/tests.rs

use super::*;
use crate::color::{ChannelAdjust, ColorSample, Rgb};
use crate::colormap::{registry::Registry, ColormapResolver, SampledColormap};
use crate::test_support::scratch_dir;
use std::io::Cursor;
use test_log::test;

fn constant_white(samples: usize) -> SampledColormap {
    SampledColormap::new(
        "white",
        Box::new(|_: f64| ColorSample {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        }),
        samples,
    )
    .unwrap()
}

#[test]
fn constant_white_palette_is_all_tinted_ceiling() {
    let palette = Palette::from_colormap(&constant_white(2048), ChannelAdjust::default());
    assert_eq!(palette.len(), 2048);
    assert!(palette.colors().iter().all(|c| *c == Rgb(255, 229, 229)));

    let mut out = Vec::new();
    palette.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2048);
    assert!(text.lines().all(|line| line == "255 229 229"));
    assert!(text.ends_with("255 229 229\n"));
}

#[test]
fn write_emits_one_line_per_entry_in_order() {
    let palette = Palette::new(vec![Rgb(0, 0, 0), Rgb(10, 20, 30), Rgb(255, 229, 229)]);
    let mut out = Vec::new();
    palette.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0 0 0\n10 20 30\n255 229 229\n");
}

#[test]
fn read_accepts_what_write_produces() {
    let palette = Palette::from_colormap(
        &Registry.resolve("viridis", 64).unwrap(),
        ChannelAdjust::default(),
    );
    let mut out = Vec::new();
    palette.write_to(&mut out).unwrap();
    assert_eq!(Palette::read_from(Cursor::new(out)).unwrap(), palette);
}

#[test]
fn read_ignores_line_layout() {
    let palette = Palette::read_from(Cursor::new("1 2\n3 4 5 6\n\n")).unwrap();
    assert_eq!(palette.colors(), &[Rgb(1, 2, 3), Rgb(4, 5, 6)]);
}

#[test]
fn read_rejects_out_of_range_component() {
    let err = Palette::read_from(Cursor::new("1 2 256\n")).unwrap_err();
    assert!(err.to_string().contains("'256'"), "{}", err);
}

#[test]
fn read_rejects_non_numeric_component() {
    let err = Palette::read_from(Cursor::new("1 2 3\nred 0 0\n")).unwrap_err();
    assert!(err.to_string().contains("line 2"), "{}", err);
}

#[test]
fn read_rejects_partial_triple() {
    let err = Palette::read_from(Cursor::new("1 2 3\n4 5\n")).unwrap_err();
    assert!(err.to_string().contains("incomplete"), "{}", err);
}

#[test]
fn read_of_empty_input_is_empty_palette() {
    assert!(Palette::read_from(Cursor::new("")).unwrap().is_empty());
}

#[test]
fn palette_channels_respect_the_adjustment_ceiling() {
    let ceiling = ChannelAdjust::default().ceiling();
    for name in Registry::supported() {
        let palette =
            Palette::from_colormap(&Registry.resolve(name, 256).unwrap(), ChannelAdjust::default());
        for c in palette.colors() {
            assert!(c.1 <= ceiling.1 && c.2 <= ceiling.2, "{}: {:?}", name, c);
        }
    }
}

#[test]
fn save_overwrites_previous_content() {
    let dir = scratch_dir("palette-save");
    std::fs::create_dir_all(&dir).unwrap();

    let long = Palette::new(vec![Rgb(9, 9, 9); 10]);
    long.save(&dir, "gray").unwrap();

    let short = Palette::new(vec![Rgb(1, 2, 3)]);
    let path = short.save(&dir, "gray").unwrap();
    assert_eq!(path, dir.join("gray.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1 2 3\n");
    assert_eq!(Palette::load(&path).unwrap(), short);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn save_into_missing_directory_fails_with_path() {
    let dir = scratch_dir("palette-missing");
    let err = Palette::new(vec![Rgb(0, 0, 0)]).save(&dir, "x").unwrap_err();
    assert!(format!("{:#}", err).contains("x.txt"), "{:#}", err);
}
