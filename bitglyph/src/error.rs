// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Point;

/// Error raised when a [`FontSource`](crate::FontSource) hands over glyph data that can't be
/// packed into an atlas.
///
/// These indicate a corrupt or mismatched font source rather than a condition to recover
/// from at draw time, which is why [`AtlasFont::new`](crate::AtlasFont::new) panics on them.
/// Use [`AtlasFont::try_new`](crate::AtlasFont::try_new) to inspect them instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The glyph index being processed, if the error concerns a single glyph.
    index: Option<usize>,

    /// The bounding box size declared in the glyph's metrics.
    declared: Point,

    /// The size of the glyph's bitmap, for size mismatches.
    actual: Option<(u32, u32)>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The glyph index that was rejected, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The declared `(width, height)` of the rejected glyph's bounding box.
    pub fn declared_size(&self) -> Point {
        self.declared
    }

    /// The `(width, height)` of the rejected glyph's bitmap, for
    /// [`ErrorKind::BitmapSizeMismatch`].
    pub fn bitmap_size(&self) -> Option<(u32, u32)> {
        self.actual
    }

    pub(crate) fn bitmap_size_mismatch(index: usize, declared: Point, actual: (u32, u32)) -> Self {
        Self {
            kind: ErrorKind::BitmapSizeMismatch,
            index: Some(index),
            declared,
            actual: Some(actual),
        }
    }

    pub(crate) fn negative_glyph_size(index: usize, declared: Point) -> Self {
        Self {
            kind: ErrorKind::NegativeGlyphSize,
            index: Some(index),
            declared,
            actual: None,
        }
    }

    pub(crate) fn atlas_too_large(index: usize, declared: Point) -> Self {
        Self {
            kind: ErrorKind::AtlasTooLarge,
            index: Some(index),
            declared,
            actual: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let index = self.index.unwrap_or_default();
        match self.kind {
            ErrorKind::BitmapSizeMismatch => {
                let (w, h) = self.actual.unwrap_or_default();
                write!(
                    f,
                    "glyph {index}: bitmap is {w}x{h} but its metrics declare {}x{}",
                    self.declared.x, self.declared.y
                )
            }
            ErrorKind::NegativeGlyphSize => write!(
                f,
                "glyph {index}: negative bounding box size {}x{}",
                self.declared.x, self.declared.y
            ),
            ErrorKind::AtlasTooLarge => write!(
                f,
                "glyph {index}: adding a {}x{} glyph overflows the atlas width",
                self.declared.x, self.declared.y
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A glyph's bitmap dimensions disagree with the bounding box size in its metrics.
    BitmapSizeMismatch,

    /// A glyph declared a negative width or height.
    NegativeGlyphSize,

    /// The combined width of all glyphs doesn't fit the atlas coordinate range.
    AtlasTooLarge,
}
