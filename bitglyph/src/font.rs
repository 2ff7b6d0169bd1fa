// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::surface::ColorSurface;
use crate::{
    Atlas, Canvas, DrawConfig, Error, FontSource, GlyphMetrics, Point, Rect, SurfaceState,
};

/// A bitmap font packed into an atlas, ready to draw.
///
/// All glyph data is copied out of the [`FontSource`] at construction. Afterwards only the
/// drawing attributes (foreground, background, transparency) can change.
///
/// Glyph indices carry no encoding. The string drawing methods treat each byte of their input
/// as one index, which suits Latin-1 fonts; [`draw_char`](Self::draw_char) takes any index.
#[derive(Clone, Debug)]
pub struct AtlasFont {
    atlas: Atlas,
    surface: ColorSurface,
}

impl AtlasFont {
    /// Builds a font from `source` with the default [`DrawConfig`].
    ///
    /// # Panics
    ///
    /// If the source holds glyph data that can't be packed; see [`Error`].
    #[track_caller]
    pub fn new<S: FontSource + ?Sized>(source: &S) -> Self {
        Self::with_config(source, DrawConfig::default())
    }

    /// Builds a font from `source` with explicit drawing attributes.
    ///
    /// # Panics
    ///
    /// If the source holds glyph data that can't be packed; see [`Error`].
    #[track_caller]
    pub fn with_config<S: FontSource + ?Sized>(source: &S, config: DrawConfig) -> Self {
        match Self::try_with_config(source, config) {
            Ok(font) => font,
            Err(err) => panic!("invalid font source: {err}"),
        }
    }

    /// Builds a font from `source`, reporting malformed glyph data as an error.
    pub fn try_new<S: FontSource + ?Sized>(source: &S) -> Result<Self, Error> {
        Self::try_with_config(source, DrawConfig::default())
    }

    /// Fallible form of [`with_config`](Self::with_config).
    pub fn try_with_config<S: FontSource + ?Sized>(
        source: &S,
        config: DrawConfig,
    ) -> Result<Self, Error> {
        let atlas = Atlas::build(source)?;
        let surface = ColorSurface::new(atlas.mask(), config);
        Ok(Self { atlas, surface })
    }

    /// The packed glyph data.
    #[inline]
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// Exclusive upper bound on glyph indices, as declared by the source.
    #[inline]
    pub fn glyph_index_limit(&self) -> usize {
        self.atlas.metrics().limit()
    }

    /// The largest index with a glyph, or `None` for a font without glyphs.
    pub fn max_valid_index(&self) -> Option<u32> {
        self.atlas
            .metrics()
            .max_present_index()
            .and_then(|i| u32::try_from(i).ok())
    }

    /// Returns `true` if the font has a glyph at `index`.
    #[inline]
    pub fn has_glyph(&self, index: u32) -> bool {
        self.atlas.metrics().get(index).is_some()
    }

    /// Atlas metrics of the glyph at `index`.
    #[inline]
    pub fn glyph_metrics(&self, index: u32) -> Option<&GlyphMetrics> {
        self.atlas.metrics().get(index)
    }

    /// The glyph's bounding box relative to its origin, or [`Rect::ZERO`] if absent.
    ///
    /// Ink above the baseline gives a negative top.
    pub fn glyph_bbox(&self, index: u32) -> Rect {
        self.glyph_metrics(index)
            .map(GlyphMetrics::relative_bbox)
            .unwrap_or_default()
    }

    /// How far drawing the glyph moves the cursor, or [`Point::ZERO`] if absent.
    pub fn glyph_advance(&self, index: u32) -> Point {
        self.glyph_metrics(index)
            .map(|m| m.advance)
            .unwrap_or_default()
    }

    /// The font's default glyph box for a glyph whose origin is at `point`.
    pub fn nominal_cell(&self, point: Point) -> Rect {
        self.atlas.nominal().relative_bbox().translate(point)
    }

    /// The font's default advance.
    ///
    /// This is the default box width, which is a reasonable stand-in for monospaced fonts.
    #[inline]
    pub fn nominal_advance(&self) -> Point {
        self.atlas.nominal().advance
    }

    /// Smallest origin-relative box enclosing every glyph.
    #[inline]
    pub fn font_bbox(&self) -> Rect {
        self.atlas.font_bbox()
    }

    /// The current drawing attributes.
    #[inline]
    pub fn config(&self) -> DrawConfig {
        self.surface.config()
    }

    /// Replaces all drawing attributes.
    pub fn set_config(&mut self, config: DrawConfig) {
        self.set_transparent(config.transparent);
        self.set_foreground(config.foreground);
        self.set_background(config.background);
    }

    /// Color of glyph ink.
    #[inline]
    pub fn foreground(&self) -> Color {
        self.surface.config().foreground
    }

    /// Color painted behind glyph ink when drawing opaquely.
    #[inline]
    pub fn background(&self) -> Color {
        self.surface.config().background
    }

    /// Whether only glyph ink is drawn.
    #[inline]
    pub fn transparent(&self) -> bool {
        self.surface.config().transparent
    }

    /// Sets the ink color.
    pub fn set_foreground(&mut self, color: Color) {
        self.surface.set_foreground(color);
    }

    /// Sets the color painted behind the ink in opaque mode.
    pub fn set_background(&mut self, color: Color) {
        self.surface.set_background(color, self.atlas.mask());
    }

    /// Chooses between drawing only ink (`true`) and painting whole glyph boxes (`false`).
    pub fn set_transparent(&mut self, transparent: bool) {
        self.surface.set_transparent(transparent);
    }

    /// Copies the foreground, background and transparency of `other`.
    pub fn set_same_colors(&mut self, other: &Self) {
        self.set_config(other.config());
    }

    /// What the internal color surface currently holds.
    #[inline]
    pub fn surface_state(&self) -> SurfaceState {
        self.surface.state()
    }

    /// Draws one glyph with its origin at `anchor`.
    ///
    /// Absent glyphs and glyphs without pixels draw nothing.
    pub fn draw_char<C: Canvas + ?Sized>(&mut self, canvas: &mut C, anchor: Point, index: u32) {
        let Some(metrics) = self.atlas.metrics().get(index).copied() else {
            return;
        };
        if metrics.bbox.is_empty() {
            return;
        }
        let mask = self.atlas.mask();
        self.surface.ensure_mixed_if_opaque(mask);
        let dest = anchor - (metrics.origin - metrics.bbox.top_left());
        canvas.draw_image(dest, self.surface.image(mask), metrics.bbox);
    }
}
