// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Bitglyph Dev
//!
//! This crate provides sample fonts for developing and testing Bitglyph.

use bitglyph::{Bitmap, BitmapFont, Point, SourceFontMetrics, SourceGlyph};

/// Glyph index of the sample font's 2x2 box, which has its own diagonal advance.
pub const BOX_INDEX: u32 = 1;

/// Glyph index of the sample font's 3x3 cross, which sits above the baseline.
pub const CROSS_INDEX: u32 = 200;

/// A string drawn entirely from glyphs of [`sample_font`].
pub const SAMPLE_TEXT: &str = "ABC";

fn glyph(bbox_offset: (i32, i32), rows: &[&str]) -> SourceGlyph {
    SourceGlyph::new(Point::new(bbox_offset.0, bbox_offset.1), Bitmap::from_rows(rows))
}

/// A small hand-drawn Latin font.
///
/// The default glyph box is 8x12 with its bottom 3 rows below the baseline, and the default
/// advance is 8. Indices go up to 255. It contains:
///
/// - `A`, `B`, `C`: 5x7 capitals on the baseline.
/// - `i`: 1x7, shifted right by one, with its own advance of 3.
/// - `j`: 4x7 with a 2-row descender.
/// - `_`: 5x1, two rows below the baseline.
/// - space: no pixels, default advance.
/// - [`BOX_INDEX`]: a 2x2 box with an advance of `(4, 2)` (Y up).
/// - [`CROSS_INDEX`]: a 3x3 cross, one right of and two above the origin.
///
/// Every other index is absent.
pub fn sample_font() -> BitmapFont {
    let metrics = SourceFontMetrics::new(8, 12, Point::new(0, -3), Point::new(8, 0));
    BitmapFont::with_index_limit(metrics, 256)
        .glyph_at(
            BOX_INDEX as usize,
            glyph((0, 0), &["##", "##"]).with_advance(Point::new(4, 2)),
        )
        .glyph_at(usize::from(b' '), SourceGlyph::blank(None))
        .glyph_at(
            usize::from(b'A'),
            glyph(
                (0, 0),
                &[".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
            ),
        )
        .glyph_at(
            usize::from(b'B'),
            glyph(
                (0, 0),
                &["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
            ),
        )
        .glyph_at(
            usize::from(b'C'),
            glyph(
                (0, 0),
                &[".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."],
            ),
        )
        .glyph_at(usize::from(b'_'), glyph((0, -2), &["#####"]))
        .glyph_at(
            usize::from(b'i'),
            glyph((1, 0), &["#", ".", "#", "#", "#", "#", "#"]).with_advance(Point::new(3, 0)),
        )
        .glyph_at(
            usize::from(b'j'),
            glyph(
                (0, -2),
                &["...#", "....", "...#", "...#", "...#", "#..#", ".##."],
            ),
        )
        .glyph_at(CROSS_INDEX as usize, glyph((1, 2), &["#.#", ".#.", "#.#"]))
}

const MINIHEX_DIGITS: [(u8, [&str; 5]); 16] = [
    (b'0', ["###", "#.#", "#.#", "#.#", "###"]),
    (b'1', [".#.", "##.", ".#.", ".#.", "###"]),
    (b'2', ["###", "..#", "###", "#..", "###"]),
    (b'3', ["###", "..#", "###", "..#", "###"]),
    (b'4', ["#.#", "#.#", "###", "..#", "..#"]),
    (b'5', ["###", "#..", "###", "..#", "###"]),
    (b'6', ["###", "#..", "###", "#.#", "###"]),
    (b'7', ["###", "..#", "..#", "..#", "..#"]),
    (b'8', ["###", "#.#", "###", "#.#", "###"]),
    (b'9', ["###", "#.#", "###", "..#", "###"]),
    (b'A', ["###", "#.#", "###", "#.#", "#.#"]),
    (b'B', ["##.", "#.#", "##.", "#.#", "##."]),
    (b'C', ["###", "#..", "#..", "#..", "###"]),
    (b'D', ["##.", "#.#", "#.#", "#.#", "##."]),
    (b'E', ["###", "#..", "###", "#..", "###"]),
    (b'F', ["###", "#..", "###", "#..", "#.."]),
];

/// A 3x5 font of the hex digits `0`-`9` and `A`-`F`, for drawing hex placeholders.
///
/// Digits sit on the baseline and advance by 4.
pub fn minihex() -> BitmapFont {
    let metrics = SourceFontMetrics::new(3, 5, Point::ZERO, Point::new(4, 0));
    let mut font = BitmapFont::with_index_limit(metrics, 128);
    for (digit, rows) in MINIHEX_DIGITS {
        font.set_glyph(usize::from(digit), glyph((0, 0), &rows));
    }
    font
}
