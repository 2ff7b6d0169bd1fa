// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-level comparisons.

use std::path::PathBuf;

use bitglyph::{Pixmap, Point, SourceGlyph};
use peniko::Color;
use peniko::color::Rgba8;

fn current_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("current")
}

/// Asserts that two pixmaps are identical.
///
/// On mismatch, both images are written to `current/` as `<name>.png` and
/// `<name>_expected.png` before panicking.
pub(crate) fn assert_pixmaps_eq(actual: &Pixmap, expected: &Pixmap, name: &str) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "{name}: size mismatch"
    );
    let Some(first) = actual
        .data()
        .iter()
        .zip(expected.data())
        .position(|(a, e)| a != e)
    else {
        return;
    };

    let dir = current_dir();
    let saved = actual.save_png(&dir.join(format!("{name}.png"))).is_ok()
        && expected
            .save_png(&dir.join(format!("{name}_expected.png")))
            .is_ok();
    let width = actual.width() as usize;
    panic!(
        "{name}: first differing pixel at ({}, {}); {}",
        first % width,
        first / width,
        if saved {
            format!("images written to {}", dir.display())
        } else {
            "images could not be written".to_owned()
        }
    );
}

/// Copies a Vello pixmap into a [`Pixmap`] so it can be compared and saved.
///
/// Channels are copied without unpremultiplying, which is exact for opaque and fully
/// transparent pixels, the only kinds glyph drawing produces from opaque colors.
pub(crate) fn from_vello(pixmap: &vello_common::pixmap::Pixmap) -> Pixmap {
    let width = usize::from(pixmap.width());
    let mut converted = Pixmap::new(u32::from(pixmap.width()), u32::from(pixmap.height()));
    for (i, px) in pixmap.data().iter().enumerate() {
        let color = Rgba8 {
            r: px.r,
            g: px.g,
            b: px.b,
            a: px.a,
        };
        converted.set_pixel((i % width) as i32, (i / width) as i32, color);
    }
    converted
}

/// Paints the pixels a glyph should produce when drawn with its origin at `anchor`, straight
/// from the source data.
///
/// Ink is painted in `foreground`. With a `background`, the rest of the glyph box is painted
/// too.
pub(crate) fn paint_glyph(
    pixmap: &mut Pixmap,
    glyph: &SourceGlyph,
    anchor: Point,
    foreground: Color,
    background: Option<Color>,
) {
    let Some(bitmap) = &glyph.bitmap else {
        return;
    };
    let offset = glyph.metrics.bbox_offset;
    let height = bitmap.height() as i32;
    // The source offset locates the box's lower-left corner, Y up.
    let left = anchor.x + offset.x;
    let top = anchor.y - (height - 1 + offset.y);

    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let color = if bitmap.get(x, y) {
                Some(foreground)
            } else {
                background
            };
            if let Some(color) = color {
                pixmap.set_pixel(left + x as i32, top + y as i32, color.to_rgba8());
            }
        }
    }
}
