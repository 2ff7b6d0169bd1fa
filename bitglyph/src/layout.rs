// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Laying out runs of glyphs.
//!
//! Layout is purely additive: each glyph is drawn at the cursor and the cursor then moves by the
//! glyph's advance. There is no kerning, no shaping, and nothing is clipped to the target
//! rectangle of the aligned forms.

use crate::{AtlasFont, Canvas, Point, Rect};

/// Horizontal placement within a rectangle.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub enum HAlign {
    /// Flush with the left edge.
    Left,
    /// Centered, rounding toward the left edge.
    #[default]
    Center,
    /// Flush with the right edge.
    Right,
}

/// Vertical placement within a rectangle.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub enum VAlign {
    /// Flush with the top edge.
    Top,
    /// Centered, rounding toward the top edge.
    #[default]
    Center,
    /// Flush with the bottom edge.
    Bottom,
}

/// Placement of a string's bounding box within a rectangle.
///
/// A direction that isn't specified is centered:
///
/// ```
/// use bitglyph::{Alignment, HAlign, VAlign};
///
/// assert_eq!(Alignment::from(HAlign::Left), Alignment::new(HAlign::Left, VAlign::Center));
/// assert_eq!(Alignment::default(), Alignment::CENTER);
/// ```
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Alignment {
    /// Horizontal placement.
    pub horizontal: HAlign,
    /// Vertical placement.
    pub vertical: VAlign,
}

impl Alignment {
    /// Centered in both directions.
    pub const CENTER: Self = Self::new(HAlign::Center, VAlign::Center);

    /// Creates an alignment.
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Where a box of `size` starts along each axis when placed in `rect`.
    fn place(self, rect: Rect, size: Point) -> Point {
        let left = match self.horizontal {
            HAlign::Left => rect.left(),
            HAlign::Right => rect.right() - size.x,
            HAlign::Center => rect.left() + (rect.width() - size.x) / 2,
        };
        let top = match self.vertical {
            VAlign::Top => rect.top(),
            VAlign::Bottom => rect.bottom() - size.y,
            VAlign::Center => rect.top() + (rect.height() - size.y) / 2,
        };
        Point::new(left, top)
    }
}

impl From<HAlign> for Alignment {
    fn from(horizontal: HAlign) -> Self {
        Self::new(horizontal, VAlign::Center)
    }
}

impl From<VAlign> for Alignment {
    fn from(vertical: VAlign) -> Self {
        Self::new(HAlign::Center, vertical)
    }
}

impl AtlasFont {
    /// Draws each byte of `text` as a glyph, starting with the first glyph's origin at `start`.
    ///
    /// Absent glyphs are skipped without moving the cursor. Returns the cursor after the last
    /// glyph.
    pub fn draw_string<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        start: Point,
        text: impl AsRef<[u8]>,
    ) -> Point {
        let mut cursor = start;
        for &byte in text.as_ref() {
            let index = u32::from(byte);
            self.draw_char(canvas, cursor, index);
            cursor += self.glyph_advance(index);
        }
        cursor
    }

    /// The box `text` would cover if drawn with its first glyph's origin at `(0, 0)`.
    ///
    /// Empty if no byte of `text` names a glyph.
    pub fn string_bbox(&self, text: impl AsRef<[u8]>) -> Rect {
        let mut glyphs = text
            .as_ref()
            .iter()
            .filter_map(|&b| self.glyph_metrics(u32::from(b)));

        let Some(first) = glyphs.next() else {
            return Rect::ZERO;
        };
        let mut bbox = first.relative_bbox();
        let mut cursor = first.advance;
        for metrics in glyphs {
            bbox = bbox.union(metrics.relative_bbox().translate(cursor));
            cursor += metrics.advance;
        }
        bbox
    }

    /// Draws `text` with the center of its bounding box at `center`.
    pub fn draw_centered_string<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        center: Point,
        text: impl AsRef<[u8]>,
    ) {
        self.draw_aligned_string(
            canvas,
            Rect::from_origin_size(center, Point::ZERO),
            Alignment::CENTER,
            text,
        );
    }

    /// Draws `text` with its bounding box placed in `rect` according to `alignment`.
    ///
    /// Text larger than `rect` overflows it; nothing is clipped.
    pub fn draw_aligned_string<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        rect: Rect,
        alignment: Alignment,
        text: impl AsRef<[u8]>,
    ) {
        let text = text.as_ref();
        let bbox = self.string_bbox(text);
        let top_left = alignment.place(rect, Point::new(bbox.width(), bbox.height()));
        self.draw_string(canvas, top_left - bbox.top_left(), text);
    }

    /// Draws `text` as lines separated by CR, LF, or CRLF, with the top-left of the first
    /// line's font box at `top_left`.
    ///
    /// Lines are spaced by the height of [`font_bbox`](Self::font_bbox). CR followed by LF is a
    /// single break, while any other run of separators (such as LF CR, or LF LF) separates
    /// empty lines, which keep their slot. A trailing line break doesn't start a new line.
    pub fn draw_multiline_string<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        top_left: Point,
        text: impl AsRef<[u8]>,
    ) {
        let font_bbox = self.font_bbox();
        let mut start = top_left - font_bbox.top_left();
        for line in lines(text.as_ref()) {
            self.draw_string(canvas, start, line);
            start.y += font_bbox.height();
        }
    }
}

/// Splits `text` at CR, LF, and CRLF.
fn lines(text: &[u8]) -> Lines<'_> {
    Lines { rest: Some(text) }
}

struct Lines<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.iter().position(|&b| b == b'\r' || b == b'\n') else {
            return Some(rest);
        };
        let mut next = end + 1;
        if rest[end] == b'\r' && rest.get(next) == Some(&b'\n') {
            next += 1;
        }
        self.rest = Some(&rest[next..]);
        Some(&rest[..end])
    }
}
