// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw targets.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use peniko::Color;
use peniko::color::Rgba8;

use crate::{Bitmap, Point, Rect};

/// Pixels to copy onto a [`Canvas`], optionally restricted by a mask.
#[derive(Copy, Clone, Debug)]
pub struct GlyphImage<'a> {
    /// Source pixels.
    pub pixels: &'a Pixmap,
    /// When present, only pixels whose mask bit is set are copied; the rest of the
    /// destination is left untouched. The mask has the same size as `pixels`.
    pub mask: Option<&'a Bitmap>,
}

/// Trait for types that glyphs can be drawn onto.
///
/// Implemented for [`Pixmap`], and for Vello's pixmap with the `vello_common` feature;
/// implement it to draw into a window system surface or a GPU upload buffer.
pub trait Canvas {
    /// Copies the `src` rectangle of `image` so that its top-left corner lands on `dest`.
    ///
    /// Pixels are copied as-is, without blending. `src` is never empty when called from
    /// this crate. Parts falling outside either image are skipped.
    fn draw_image(&mut self, dest: Point, image: GlyphImage<'_>, src: Rect);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_image(&mut self, dest: Point, image: GlyphImage<'_>, src: Rect) {
        (**self).draw_image(dest, image, src);
    }
}

/// An owned RGBA raster, 8 bits per channel, not premultiplied.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<Rgba8>,
}

const TRANSPARENT: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

impl Pixmap {
    /// Creates a pixmap filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Creates a pixmap filled with `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut pixmap = Self::new(width, height);
        pixmap.fill(color);
        pixmap
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

    /// The rectangle covering the whole pixmap.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// The pixels in row-major order.
    #[inline]
    pub fn data(&self) -> &[Rgba8] {
        &self.data
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color.to_rgba8());
    }

    /// Sets every pixel whose bit is set in `mask` to `color`.
    pub fn fill_masked(&mut self, color: Color, mask: &Bitmap) {
        let color = color.to_rgba8();
        let width = self.width.min(mask.width());
        let height = self.height.min(mask.height());
        for y in 0..height {
            for x in 0..width {
                if mask.get(x, y) {
                    let offset = self.offset(x, y);
                    self.data[offset] = color;
                }
            }
        }
    }

    /// The pixel at `(x, y)`, or `None` outside the pixmap.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        let (x, y) = self.checked_coords(x, y)?;
        Some(self.data[self.offset(x, y)])
    }

    /// Sets the pixel at `(x, y)`. Writes outside the pixmap are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if let Some((x, y)) = self.checked_coords(x, y) {
            let offset = self.offset(x, y);
            self.data[offset] = color;
        }
    }

    /// The smallest rectangle containing every pixel that differs from `background`, or
    /// [`Rect::ZERO`] if there is none.
    pub fn ink_bounds(&self, background: Color) -> Rect {
        let background = background.to_rgba8();
        let mut ink = Rect::ZERO;
        for (i, px) in self.data.iter().enumerate() {
            if *px != background {
                let (x, y) = self.coords_of(i);
                ink = ink.union(Rect::new(x, y, 1, 1));
            }
        }
        ink
    }

    /// Writes the pixmap to a PNG file, creating parent directories as needed.
    #[cfg(feature = "png")]
    pub fn save_png(&self, path: &std::path::Path) -> std::io::Result<()> {
        use std::fs::File;
        use std::io::BufWriter;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let w = BufWriter::new(file);

        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().map_err(std::io::Error::other)?;

        let bytes: Vec<u8> = self.data.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect();
        writer
            .write_image_data(&bytes)
            .map_err(std::io::Error::other)?;

        Ok(())
    }

    fn checked_coords(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "pixel offsets come from a pixmap whose sides fit in i32"
    )]
    fn coords_of(&self, offset: usize) -> (i32, i32) {
        let width = self.width as usize;
        ((offset % width) as i32, (offset / width) as i32)
    }
}

/// Calls `put` with each destination position and source pixel that copying the `src`
/// rectangle of `image` to `dest` writes, restricted to `target`.
///
/// This is the clipping and masking shared by [`Canvas`] implementations.
pub(crate) fn for_each_copied_pixel(
    dest: Point,
    image: GlyphImage<'_>,
    src: Rect,
    target: Rect,
    mut put: impl FnMut(i32, i32, Rgba8),
) {
    // The shift comes from the requested rectangle so clipping never moves pixels.
    let shift = dest - src.top_left();
    let src = src.intersect(image.pixels.bounds());
    let visible = src.translate(shift).intersect(target);
    if visible.is_empty() {
        return;
    }

    for dy in visible.top()..visible.bottom() {
        for dx in visible.left()..visible.right() {
            let (sx, sy) = (dx - shift.x, dy - shift.y);
            if let Some(mask) = image.mask {
                if !mask.get_signed(sx, sy) {
                    continue;
                }
            }
            if let Some(px) = image.pixels.pixel(sx, sy) {
                put(dx, dy, px);
            }
        }
    }
}

impl Canvas for Pixmap {
    fn draw_image(&mut self, dest: Point, image: GlyphImage<'_>, src: Rect) {
        let target = self.bounds();
        for_each_copied_pixel(dest, image, src, target, |x, y, px| {
            self.set_pixel(x, y, px);
        });
    }
}

impl Debug for Pixmap {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
