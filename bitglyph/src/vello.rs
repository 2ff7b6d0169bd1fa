// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing onto Vello's CPU pixmap.

use vello_common::peniko::Color;
use vello_common::pixmap::Pixmap;

use crate::canvas::for_each_copied_pixel;
use crate::{Canvas, GlyphImage, Point, Rect};

/// Copies glyph pixels into the pixmap, premultiplying them on the way.
impl Canvas for Pixmap {
    fn draw_image(&mut self, dest: Point, image: GlyphImage<'_>, src: Rect) {
        let width = usize::from(self.width());
        let target = Rect::new(0, 0, i32::from(self.width()), i32::from(self.height()));
        let data = self.data_mut();
        for_each_copied_pixel(dest, image, src, target, |x, y, px| {
            // Positions are inside `target`, so never negative.
            let offset = y as usize * width + x as usize;
            data[offset] = Color::from_rgba8(px.r, px.g, px.b, px.a)
                .premultiply()
                .to_rgba8();
        });
    }
}
