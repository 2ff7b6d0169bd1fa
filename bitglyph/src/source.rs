// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary with whatever parses font files.
//!
//! Coordinates on this side follow font-file conventions: a glyph's bounding box offset is
//! measured from the glyph origin to the *lower-left* corner of the box, and Y grows upward.

use alloc::vec::Vec;

use crate::{Bitmap, Point};

/// Placement metrics a font source declares for one glyph.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct SourceGlyphMetrics {
    /// Bounding box `(width, height)`.
    pub bbox_size: Point,
    /// Offset from the origin to the lower-left corner of the bounding box, Y up.
    pub bbox_offset: Point,
    /// The glyph's own advance, Y up. `None` falls back to [`SourceFontMetrics::advance`].
    pub advance: Option<Point>,
}

/// One glyph as delivered by a font source.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct SourceGlyph {
    /// Placement metrics.
    pub metrics: SourceGlyphMetrics,
    /// Pixel data, row 0 at the top. Must match `metrics.bbox_size` when present.
    ///
    /// A glyph without a bitmap (typically a space) contributes no pixels.
    pub bitmap: Option<Bitmap>,
}

impl SourceGlyph {
    /// Creates a glyph whose bounding box is exactly the size of `bitmap`.
    pub fn new(bbox_offset: Point, bitmap: Bitmap) -> Self {
        let bbox_size = Point::new(bitmap.width() as i32, bitmap.height() as i32);
        Self {
            metrics: SourceGlyphMetrics {
                bbox_size,
                bbox_offset,
                advance: None,
            },
            bitmap: Some(bitmap),
        }
    }

    /// Creates a glyph with no pixels that only moves the drawing point.
    pub fn blank(advance: Option<Point>) -> Self {
        Self {
            metrics: SourceGlyphMetrics {
                advance,
                ..SourceGlyphMetrics::default()
            },
            bitmap: None,
        }
    }

    /// Sets the glyph's own advance.
    #[must_use]
    pub fn with_advance(mut self, advance: Point) -> Self {
        self.metrics.advance = Some(advance);
        self
    }
}

/// Font-wide defaults declared by a font source.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct SourceFontMetrics {
    /// Default bounding box `(width, height)`.
    pub bbox_size: Point,
    /// Default offset from the origin to the lower-left corner of the bounding box, Y up.
    pub bbox_offset: Point,
    /// Default advance for glyphs that don't declare their own, Y up.
    pub advance: Point,
}

impl SourceFontMetrics {
    /// Creates font-wide metrics.
    pub const fn new(width: i32, height: i32, bbox_offset: Point, advance: Point) -> Self {
        Self {
            bbox_size: Point::new(width, height),
            bbox_offset,
            advance,
        }
    }
}

/// A parsed bitmap font, as consumed by [`AtlasFont`](crate::AtlasFont).
///
/// Implement this for the output of a font-file parser. Glyph indices carry no particular
/// encoding; valid indices are `0..glyph_index_limit()`.
pub trait FontSource {
    /// Exclusive upper bound on glyph indices.
    fn glyph_index_limit(&self) -> usize;

    /// The glyph at `index`, if the font has one.
    fn glyph(&self, index: usize) -> Option<&SourceGlyph>;

    /// Font-wide default metrics.
    fn font_metrics(&self) -> SourceFontMetrics;
}

impl<T: FontSource + ?Sized> FontSource for &T {
    fn glyph_index_limit(&self) -> usize {
        (**self).glyph_index_limit()
    }

    fn glyph(&self, index: usize) -> Option<&SourceGlyph> {
        (**self).glyph(index)
    }

    fn font_metrics(&self) -> SourceFontMetrics {
        (**self).font_metrics()
    }
}

/// An in-memory [`FontSource`].
///
/// Useful for fonts compiled into a program and for tests; a file parser can also target it
/// directly instead of implementing the trait.
#[derive(Clone, Default, Debug)]
pub struct BitmapFont {
    metrics: SourceFontMetrics,
    glyphs: Vec<Option<SourceGlyph>>,
}

impl BitmapFont {
    /// Creates a font with no glyphs.
    pub fn new(metrics: SourceFontMetrics) -> Self {
        Self {
            metrics,
            glyphs: Vec::new(),
        }
    }

    /// Creates a font with no glyphs and a fixed index limit.
    pub fn with_index_limit(metrics: SourceFontMetrics, limit: usize) -> Self {
        let mut glyphs = Vec::new();
        glyphs.resize_with(limit, || None);
        Self { metrics, glyphs }
    }

    /// Stores `glyph` at `index`, growing the index limit if needed.
    pub fn set_glyph(&mut self, index: usize, glyph: SourceGlyph) {
        if self.glyphs.len() <= index {
            self.glyphs.resize_with(index + 1, || None);
        }
        self.glyphs[index] = Some(glyph);
    }

    /// Builder form of [`BitmapFont::set_glyph`].
    #[must_use]
    pub fn glyph_at(mut self, index: usize, glyph: SourceGlyph) -> Self {
        self.set_glyph(index, glyph);
        self
    }

    /// Removes the glyph at `index`. The index limit is unchanged.
    pub fn remove_glyph(&mut self, index: usize) -> Option<SourceGlyph> {
        self.glyphs.get_mut(index).and_then(Option::take)
    }

    /// The largest index holding a glyph.
    pub fn max_glyph_index(&self) -> Option<usize> {
        self.glyphs.iter().rposition(Option::is_some)
    }

    /// The number of glyphs present.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_some()).count()
    }

    /// Iterates over `(index, glyph)` for every present glyph, in index order.
    pub fn glyphs(&self) -> impl Iterator<Item = (usize, &SourceGlyph)> + '_ {
        self.glyphs
            .iter()
            .enumerate()
            .filter_map(|(i, g)| g.as_ref().map(|g| (i, g)))
    }
}

impl FontSource for BitmapFont {
    fn glyph_index_limit(&self) -> usize {
        self.glyphs.len()
    }

    fn glyph(&self, index: usize) -> Option<&SourceGlyph> {
        self.glyphs.get(index).and_then(Option::as_ref)
    }

    fn font_metrics(&self) -> SourceFontMetrics {
        self.metrics
    }
}
