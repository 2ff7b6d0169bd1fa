// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The colored copy of the atlas that glyphs are actually drawn from.
//!
//! Drawing transparently needs every ink pixel in the foreground color, with the atlas as a
//! mask. Drawing opaquely needs the background color painted in as well, which costs a masked
//! fill over the whole atlas. That fill is done lazily on the first opaque draw after a color
//! or mode change, so runs of draws with stable colors pay for it once.

use peniko::Color;
use peniko::color::palette::css::{BLACK, WHITE};

use crate::{Bitmap, GlyphImage, Pixmap};

/// Drawing attributes of an [`AtlasFont`](crate::AtlasFont).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawConfig {
    /// Color of glyph ink.
    pub foreground: Color,
    /// Color painted behind the ink in opaque mode.
    pub background: Color,
    /// If `true`, only ink pixels are drawn. Otherwise each glyph's whole bounding box is
    /// painted, ink in `foreground` and the rest in `background`.
    pub transparent: bool,
}

impl Default for DrawConfig {
    /// Black on white, transparent.
    fn default() -> Self {
        Self {
            foreground: BLACK,
            background: WHITE,
            transparent: true,
        }
    }
}

/// What the color surface currently holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceState {
    /// Every pixel is the foreground color.
    ///
    /// Only meaningful when drawn through the atlas mask.
    Solid,
    /// Ink pixels in the foreground color over a background-colored field.
    Mixed,
}

/// Foreground/background raster over the atlas, kept consistent with the drawing mode.
#[derive(Clone, Debug)]
pub(crate) struct ColorSurface {
    pixels: Pixmap,
    config: DrawConfig,
    state: SurfaceState,
}

fn same_color(a: Color, b: Color) -> bool {
    a.to_rgba8() == b.to_rgba8()
}

impl ColorSurface {
    /// Creates a surface for `mask`, initially solid foreground.
    pub(crate) fn new(mask: &Bitmap, config: DrawConfig) -> Self {
        Self {
            pixels: Pixmap::filled(mask.width(), mask.height(), config.foreground),
            config,
            state: SurfaceState::Solid,
        }
    }

    #[inline]
    pub(crate) fn config(&self) -> DrawConfig {
        self.config
    }

    #[inline]
    pub(crate) fn state(&self) -> SurfaceState {
        self.state
    }

    pub(crate) fn set_foreground(&mut self, color: Color) {
        let changed = !same_color(self.config.foreground, color);
        self.config.foreground = color;
        if changed {
            self.paint_solid();
        }
    }

    pub(crate) fn set_background(&mut self, color: Color, mask: &Bitmap) {
        let changed = !same_color(self.config.background, color);
        self.config.background = color;
        // While solid, the background isn't in the surface yet.
        if changed && self.state == SurfaceState::Mixed {
            self.paint_mixed(mask);
        }
    }

    pub(crate) fn set_transparent(&mut self, transparent: bool) {
        if self.config.transparent == transparent {
            return;
        }
        self.config.transparent = transparent;
        if !transparent {
            // Mixed is rebuilt on the next draw.
            self.paint_solid();
        }
        // Going transparent needs no repaint: ink pixels hold the foreground color in both
        // states, and the mask hides everything else.
    }

    /// Makes the surface usable for the current mode. Call before every draw.
    pub(crate) fn ensure_mixed_if_opaque(&mut self, mask: &Bitmap) {
        if !self.config.transparent && self.state != SurfaceState::Mixed {
            self.paint_mixed(mask);
        }
    }

    /// The pixels to blit from, masked by the atlas in transparent mode.
    pub(crate) fn image<'a>(&'a self, mask: &'a Bitmap) -> GlyphImage<'a> {
        GlyphImage {
            pixels: &self.pixels,
            mask: self.config.transparent.then_some(mask),
        }
    }

    fn paint_solid(&mut self) {
        log::trace!("repainting glyph surface solid {:?}", self.config.foreground);
        self.pixels.fill(self.config.foreground);
        self.state = SurfaceState::Solid;
    }

    fn paint_mixed(&mut self, mask: &Bitmap) {
        log::trace!(
            "repainting glyph surface {:?} over {:?}",
            self.config.foreground,
            self.config.background
        );
        self.pixels.fill(self.config.background);
        self.pixels.fill_masked(self.config.foreground, mask);
        self.state = SurfaceState::Mixed;
    }
}
