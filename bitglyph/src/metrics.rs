// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-glyph placement data in atlas coordinates.

use alloc::vec::Vec;

use crate::{Point, Rect};

/// Placement of one glyph inside the atlas.
///
/// Missing glyphs have every field zeroed.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Where the glyph's pixels are in the atlas.
    pub bbox: Rect,
    /// The glyph's baseline reference point in atlas coordinates.
    ///
    /// Not necessarily inside `bbox`, nor even inside the atlas.
    pub origin: Point,
    /// How far to move the drawing point after drawing this glyph.
    pub advance: Point,
}

impl GlyphMetrics {
    /// Returns `true` if this entry describes a glyph.
    ///
    /// The advance has to be checked as well as the box, because a space has an empty box
    /// but still moves the drawing point.
    #[inline]
    pub fn is_present(&self) -> bool {
        !(self.bbox.width == 0 && self.bbox.height == 0 && self.advance.is_zero())
    }

    /// The bounding box relative to the origin.
    ///
    /// The top is negative for any glyph with ink above the baseline.
    #[inline]
    pub fn relative_bbox(&self) -> Rect {
        self.bbox.translate(-self.origin)
    }
}

/// Locates the origin of a glyph placed at `left` in the atlas.
///
/// Font sources measure `bbox_offset` from the origin to the lower-left corner of the box
/// with Y growing upward; the atlas has Y growing downward. With a zero offset the origin
/// is therefore the bottom-left pixel of the box, `(left, height - 1)`. A positive X offset
/// moves the box right, which is the origin moving left. A positive Y offset moves the box
/// up, which is the origin moving down.
#[inline]
pub(crate) fn baseline_origin(left: i32, height: i32, bbox_offset: Point) -> Point {
    Point::new(left - bbox_offset.x, height - 1 + bbox_offset.y)
}

/// Converts a Y-up source advance into atlas coordinates.
#[inline]
pub(crate) fn atlas_advance(source_advance: Point) -> Point {
    Point::new(source_advance.x, -source_advance.y)
}

/// Glyph metrics indexed directly by glyph index.
#[derive(Clone, Default, Debug)]
pub struct MetricsTable {
    entries: Vec<GlyphMetrics>,
}

impl MetricsTable {
    /// Creates a table of `limit` absent entries.
    pub(crate) fn with_limit(limit: usize) -> Self {
        let mut entries = Vec::new();
        entries.resize(limit, GlyphMetrics::default());
        Self { entries }
    }

    pub(crate) fn set(&mut self, index: usize, metrics: GlyphMetrics) {
        self.entries[index] = metrics;
    }

    /// Exclusive upper bound on glyph indices.
    #[inline]
    pub fn limit(&self) -> usize {
        self.entries.len()
    }

    /// The metrics for `index`, or `None` if that glyph is missing.
    #[inline]
    pub fn get(&self, index: u32) -> Option<&GlyphMetrics> {
        let entry = self.entries.get(usize::try_from(index).ok()?)?;
        entry.is_present().then_some(entry)
    }

    /// Iterates over `(index, metrics)` for every present glyph, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &GlyphMetrics)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_present())
    }

    /// The largest index with a present glyph.
    pub fn max_present_index(&self) -> Option<usize> {
        self.entries.iter().rposition(GlyphMetrics::is_present)
    }
}
