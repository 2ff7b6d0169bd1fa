// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholders for characters a font can't draw.
//!
//! A missing code point is shown as its low 16 bits in hexadecimal, as a 2x2 block of digits
//! drawn with a second, much smaller font: the high byte on top, the low byte below.

use crate::{AtlasFont, Canvas, Point, Rect};

/// Two uppercase hex digits for `byte`.
fn hex_digits(byte: u8) -> [u8; 2] {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    [
        DIGITS[usize::from(byte >> 4)],
        DIGITS[usize::from(byte & 0x0F)],
    ]
}

/// Draws `code_point` as four hex digits in `bounds`, using `font` for the digits.
///
/// The high byte is centered on the line a quarter of the way down `bounds`, the low byte on
/// the line three quarters of the way down. Bits above the low 16 are ignored. Digits are drawn
/// in `font`'s own colors and are not clipped to `bounds`.
pub fn draw_hex_quad<C: Canvas + ?Sized>(
    font: &mut AtlasFont,
    canvas: &mut C,
    bounds: Rect,
    code_point: u32,
) {
    let [_, _, high, low] = code_point.to_be_bytes();
    let center_x = bounds.center().x;
    let top = bounds.top();
    let height = bounds.height();

    font.draw_centered_string(canvas, Point::new(center_x, top + height / 4), hex_digits(high));
    font.draw_centered_string(
        canvas,
        Point::new(center_x, top + height * 3 / 4),
        hex_digits(low),
    );
}

/// Draws `code_point` with `main` if it has that glyph, or as a hex placeholder otherwise.
///
/// The placeholder fills `main`'s nominal cell at `point` and uses `hex` for its digits.
/// Returns the point to draw the next character at.
pub fn draw_char_or_hex_quad<C: Canvas + ?Sized>(
    main: &mut AtlasFont,
    hex: &mut AtlasFont,
    canvas: &mut C,
    point: Point,
    code_point: u32,
) -> Point {
    if main.has_glyph(code_point) {
        main.draw_char(canvas, point, code_point);
        point + main.glyph_advance(code_point)
    } else {
        draw_hex_quad(hex, canvas, main.nominal_cell(point), code_point);
        point + main.nominal_advance()
    }
}
