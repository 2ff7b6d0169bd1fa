// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monochrome bitmaps.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

/// A monochrome bitmap, one bit per pixel.
///
/// Rows are packed least-significant-bit first, each row starting on a byte boundary.
/// Used both for individual source glyphs and for the packed glyph atlas, where a set bit
/// marks a foreground (ink) pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    /// Bytes per row.
    stride: usize,
    bits: Vec<u8>,
}

impl Bitmap {
    /// Creates a bitmap with every pixel clear.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = (width as usize).div_ceil(8);
        Self {
            width,
            height,
            stride,
            bits: vec![0; stride * height as usize],
        }
    }

    /// Creates a bitmap from rows of ASCII art.
    ///
    /// `#`, `X` and `@` mark set pixels; any other character is clear. The width is the
    /// length of the longest row, and shorter rows are padded with clear pixels.
    ///
    /// ```
    /// # use bitglyph::Bitmap;
    /// let tee = Bitmap::from_rows(&["###", ".#.", ".#."]);
    /// assert_eq!((tee.width(), tee.height()), (3, 3));
    /// assert!(tee.get(1, 2));
    /// assert!(!tee.get(0, 2));
    /// ```
    #[expect(
        clippy::cast_possible_truncation,
        reason = "ASCII art glyphs are far smaller than u32::MAX in either direction"
    )]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut bitmap = Self::new(width as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.as_ref().chars().enumerate() {
                if matches!(c, '#' | 'X' | '@') {
                    bitmap.set(x as u32, y as u32, true);
                }
            }
        }
        bitmap
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` if the bitmap has no pixels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns whether the pixel at `(x, y)` is set. Pixels outside the bitmap are clear.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.bits[y as usize * self.stride + x as usize / 8];
        byte & (1 << (x % 8)) != 0
    }

    /// Like [`Bitmap::get`], for signed coordinates.
    #[inline]
    pub fn get_signed(&self, x: i32, y: i32) -> bool {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y),
            _ => false,
        }
    }

    /// Sets or clears the pixel at `(x, y)`.
    ///
    /// Writes outside the bitmap are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let byte = &mut self.bits[y as usize * self.stride + x as usize / 8];
        let bit = 1 << (x % 8);
        if on {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Clears every pixel.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// The number of set pixels.
    pub fn count_ones(&self) -> usize {
        // Padding bits past `width` are never set, so counting whole bytes is exact.
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Debug for Bitmap {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Bitmap {}x{}", self.width, self.height)?;
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.get(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Bitmap;

    #[test]
    fn bitmap_set_and_get_across_byte_boundary() {
        let mut b = Bitmap::new(11, 2);
        b.set(7, 0, true);
        b.set(8, 0, true);
        b.set(10, 1, true);
        assert!(b.get(7, 0), "last bit of first byte");
        assert!(b.get(8, 0), "first bit of second byte");
        assert!(b.get(10, 1), "second row");
        assert!(!b.get(10, 0), "untouched");
        assert_eq!(b.count_ones(), 3, "three pixels set");

        b.set(8, 0, false);
        assert!(!b.get(8, 0), "cleared");
    }

    #[test]
    fn bitmap_out_of_range_is_clear() {
        let mut b = Bitmap::new(3, 3);
        b.set(5, 5, true);
        assert_eq!(b.count_ones(), 0, "write outside bitmap ignored");
        assert!(!b.get(3, 0), "x out of range");
        assert!(!b.get_signed(-1, 0), "negative x");
    }

    #[test]
    fn bitmap_from_rows_pads_short_rows() {
        let b = Bitmap::from_rows(&["#", "..#"]);
        assert_eq!((b.width(), b.height()), (3, 2), "size from longest row");
        assert!(b.get(0, 0), "top-left");
        assert!(!b.get(2, 0), "padding");
        assert!(b.get(2, 1), "bottom-right");
    }

    #[test]
    fn bitmap_empty() {
        let b = Bitmap::from_rows::<&str>(&[]);
        assert!(b.is_empty(), "no rows");
        assert_eq!(b, Bitmap::default(), "same as default");
    }
}
