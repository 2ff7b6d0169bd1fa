// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packing a font's glyphs into a single monochrome atlas.
//!
//! Glyphs are placed side by side in one row, in ascending index order, with their tops
//! aligned at `y = 0`. Optimal packing is not attempted: the atlas is built once per font and
//! only its lookup speed matters afterward.

use crate::metrics::{atlas_advance, baseline_origin};
use crate::{Bitmap, Error, FontSource, GlyphMetrics, MetricsTable, Point, Rect};

/// Everything derived from a font source: the packed pixels and where each glyph lives.
#[derive(Clone, Debug)]
pub struct Atlas {
    /// Every glyph's pixels; set bits are ink.
    mask: Bitmap,
    metrics: MetricsTable,
    /// Font-wide default metrics, used to size placeholders for missing glyphs.
    nominal: GlyphMetrics,
    /// Union of all glyph boxes, relative to the origin.
    font_bbox: Rect,
}

impl Atlas {
    /// Packs every glyph of `source`.
    ///
    /// Fails if a glyph's bitmap disagrees with its declared size, or if a declared size is
    /// negative.
    pub fn build<S: FontSource + ?Sized>(source: &S) -> Result<Self, Error> {
        AtlasBuilder::new(source).build()
    }

    /// The packed glyph pixels.
    #[inline]
    pub fn mask(&self) -> &Bitmap {
        &self.mask
    }

    /// Per-glyph metrics.
    #[inline]
    pub fn metrics(&self) -> &MetricsTable {
        &self.metrics
    }

    /// Font-wide nominal metrics.
    #[inline]
    pub fn nominal(&self) -> &GlyphMetrics {
        &self.nominal
    }

    /// Smallest origin-relative box enclosing every glyph.
    #[inline]
    pub fn font_bbox(&self) -> Rect {
        self.font_bbox
    }
}

/// One-shot construction of an [`Atlas`].
struct AtlasBuilder<'a, S: ?Sized> {
    source: &'a S,
    metrics: MetricsTable,
    font_bbox: Rect,
    /// Left edge for the next glyph; after the first pass, the atlas width.
    current_x: i32,
    max_height: i32,
    glyph_count: usize,
}

impl<'a, S: FontSource + ?Sized> AtlasBuilder<'a, S> {
    fn new(source: &'a S) -> Self {
        Self {
            source,
            metrics: MetricsTable::with_limit(source.glyph_index_limit()),
            font_bbox: Rect::ZERO,
            current_x: 0,
            max_height: 0,
            glyph_count: 0,
        }
    }

    fn build(mut self) -> Result<Atlas, Error> {
        self.place_glyphs()?;
        let mask = self.copy_pixels()?;

        let font = self.source.font_metrics();
        let size = font.bbox_size;
        let nominal = GlyphMetrics {
            bbox: Rect::from_origin_size(Point::ZERO, size),
            origin: baseline_origin(0, size.y, font.bbox_offset),
            // The source has no better font-wide horizontal metric than the box width.
            advance: Point::new(size.x, 0),
        };

        log::debug!(
            "packed {} glyphs into a {}x{} atlas, font bbox {:?}",
            self.glyph_count,
            mask.width(),
            mask.height(),
            self.font_bbox,
        );

        Ok(Atlas {
            mask,
            metrics: self.metrics,
            nominal,
            font_bbox: self.font_bbox,
        })
    }

    /// First pass: assign each glyph a box and derive its metrics.
    fn place_glyphs(&mut self) -> Result<(), Error> {
        let default_advance = self.source.font_metrics().advance;
        for index in 0..self.metrics.limit() {
            let Some(glyph) = self.source.glyph(index) else {
                continue;
            };
            let gm = glyph.metrics;
            let size = gm.bbox_size;
            if size.x < 0 || size.y < 0 {
                log::warn!("rejecting glyph {index}: negative size {size:?}");
                return Err(Error::negative_glyph_size(index, size));
            }

            let left = self.current_x;
            let metrics = GlyphMetrics {
                bbox: Rect::from_origin_size(Point::new(left, 0), size),
                origin: baseline_origin(left, size.y, gm.bbox_offset),
                advance: atlas_advance(gm.advance.unwrap_or(default_advance)),
            };
            self.metrics.set(index, metrics);

            self.current_x = left
                .checked_add(size.x)
                .ok_or_else(|| Error::atlas_too_large(index, size))?;
            self.max_height = self.max_height.max(size.y);
            self.glyph_count += 1;

            if metrics.is_present() {
                self.font_bbox = self.font_bbox.union(metrics.relative_bbox());
            }
        }
        Ok(())
    }

    /// Second pass: copy glyph pixels into their boxes.
    fn copy_pixels(&self) -> Result<Bitmap, Error> {
        let width = u32::try_from(self.current_x).unwrap_or_default();
        let height = u32::try_from(self.max_height).unwrap_or_default();
        let mut mask = Bitmap::new(width, height);

        for index in 0..self.metrics.limit() {
            let Some(glyph) = self.source.glyph(index) else {
                continue;
            };
            let Some(bitmap) = &glyph.bitmap else {
                continue;
            };
            let size = glyph.metrics.bbox_size;
            if i64::from(bitmap.width()) != i64::from(size.x)
                || i64::from(bitmap.height()) != i64::from(size.y)
            {
                log::warn!(
                    "rejecting glyph {index}: {}x{} bitmap for a {}x{} box",
                    bitmap.width(),
                    bitmap.height(),
                    size.x,
                    size.y
                );
                return Err(Error::bitmap_size_mismatch(
                    index,
                    size,
                    (bitmap.width(), bitmap.height()),
                ));
            }

            // Boxes are laid out at non-negative x from the first pass.
            let left = u32::try_from(self.metrics_at(index).bbox.x).unwrap_or_default();
            for y in 0..bitmap.height() {
                for x in 0..bitmap.width() {
                    if bitmap.get(x, y) {
                        mask.set(left + x, y, true);
                    }
                }
            }
        }
        Ok(mask)
    }

    fn metrics_at(&self, index: usize) -> GlyphMetrics {
        u32::try_from(index)
            .ok()
            .and_then(|i| self.metrics.get(i))
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::Atlas;
    use crate::{Bitmap, BitmapFont, ErrorKind, Point, Rect, SourceFontMetrics, SourceGlyph};

    fn font() -> BitmapFont {
        BitmapFont::with_index_limit(
            SourceFontMetrics::new(6, 9, Point::new(0, -2), Point::new(7, 0)),
            128,
        )
        .glyph_at(32, SourceGlyph::blank(None))
        .glyph_at(
            b'L'.into(),
            SourceGlyph::new(Point::ZERO, Bitmap::from_rows(&["#..", "#..", "###"])),
        )
        .glyph_at(
            b'q'.into(),
            SourceGlyph::new(Point::new(1, -1), Bitmap::from_rows(&["##", "##", ".#"]))
                .with_advance(Point::new(4, 1)),
        )
    }

    #[test]
    fn atlas_packs_in_index_order() {
        let atlas = Atlas::build(&font()).unwrap();
        assert_eq!(atlas.mask().width(), 5, "sum of widths");
        assert_eq!(atlas.mask().height(), 3, "tallest glyph");

        let space = atlas.metrics().get(32).unwrap();
        assert_eq!(space.bbox, Rect::new(0, 0, 0, 0), "space takes no pixels");
        assert_eq!(space.advance, Point::new(7, 0), "default advance");

        let l = atlas.metrics().get(b'L'.into()).unwrap();
        assert_eq!(l.bbox, Rect::new(0, 0, 3, 3), "L placed first");
        assert_eq!(l.origin, Point::new(0, 2), "origin at bottom-left pixel");

        let q = atlas.metrics().get(b'q'.into()).unwrap();
        assert_eq!(q.bbox, Rect::new(3, 0, 2, 3), "q placed after L");
        assert_eq!(q.origin, Point::new(2, 1), "offset flips into origin");
        assert_eq!(q.advance, Point::new(4, -1), "Y advance negated");

        assert!(atlas.mask().get(3 + 1, 2), "q pixel copied");
        assert!(!atlas.mask().get(3, 2), "q blank pixel stays clear");
        assert_eq!(atlas.mask().count_ones(), 5 + 5, "no stray pixels");
    }

    #[test]
    fn atlas_font_bbox_and_nominal() {
        let atlas = Atlas::build(&font()).unwrap();
        // L is (0, -2, 3, 3); q is (1, -1, 2, 3).
        assert_eq!(atlas.font_bbox(), Rect::new(0, -2, 3, 4), "union of glyph boxes");

        let nominal = atlas.nominal();
        assert_eq!(nominal.bbox, Rect::new(0, 0, 6, 9), "default box");
        assert_eq!(nominal.origin, Point::new(0, 6), "default offset");
        assert_eq!(nominal.advance, Point::new(6, 0), "box width");
    }

    #[test]
    fn atlas_absent_slots_stay_zero() {
        let atlas = Atlas::build(&font()).unwrap();
        assert_eq!(atlas.metrics().limit(), 128, "sized to index limit");
        assert!(atlas.metrics().get(b'A'.into()).is_none(), "never defined");
        assert!(atlas.metrics().get(1000).is_none(), "past the limit");
        assert_eq!(atlas.metrics().max_present_index(), Some(usize::from(b'q')), "max");
    }

    #[test]
    fn atlas_rejects_size_mismatch() {
        let mut glyph = SourceGlyph::new(Point::ZERO, Bitmap::from_rows(&["##", "##"]));
        glyph.metrics.bbox_size = Point::new(3, 2);
        let font = font().glyph_at(b'x'.into(), glyph);
        let err = Atlas::build(&font).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BitmapSizeMismatch, "kind");
        assert_eq!(err.index(), Some(usize::from(b'x')), "index");
        assert_eq!(err.bitmap_size(), Some((2, 2)), "actual size");
    }

    #[test]
    fn atlas_rejects_negative_size() {
        let mut glyph = SourceGlyph::blank(None);
        glyph.metrics.bbox_size = Point::new(-1, 4);
        let font = font().glyph_at(5, glyph);
        let err = Atlas::build(&font).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NegativeGlyphSize, "kind");
    }

    #[test]
    fn atlas_of_empty_font() {
        let atlas = Atlas::build(&BitmapFont::new(SourceFontMetrics::default())).unwrap();
        assert!(atlas.mask().is_empty(), "no pixels");
        assert_eq!(atlas.metrics().max_present_index(), None, "no glyphs");
        assert_eq!(atlas.font_bbox(), Rect::ZERO, "nothing to enclose");
    }
}
