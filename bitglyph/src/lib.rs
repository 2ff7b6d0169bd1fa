// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitglyph turns a bitmap font into a single packed glyph atlas and draws text with it.
//!
//! The input is any [`FontSource`]: an indexed collection of monochrome glyph bitmaps with
//! per-glyph placement metrics, as produced by a BDF-style parser. [`AtlasFont`] copies what it
//! needs out of the source, so the source can be dropped after construction.
//!
//! Drawing is pixel-exact. Glyph pixels are copied from the atlas onto any [`Canvas`]
//! (an RGBA [`Pixmap`] implementation is provided) either transparently, touching only the
//! glyph's ink, or opaquely, painting the whole glyph bounding box with the background color.
//!
//! ```
//! use bitglyph::{AtlasFont, Bitmap, BitmapFont, Pixmap, Point, SourceFontMetrics, SourceGlyph};
//!
//! let mut source = BitmapFont::new(SourceFontMetrics::new(3, 3, Point::ZERO, Point::new(4, 0)));
//! source.set_glyph(b'x'.into(), SourceGlyph::new(Point::ZERO, Bitmap::from_rows(&["#.#", ".#.", "#.#"])));
//!
//! let mut font = AtlasFont::new(&source);
//! let mut canvas = Pixmap::new(16, 8);
//! font.draw_string(&mut canvas, Point::new(1, 5), "xx");
//! assert_eq!(font.string_bbox("xx").width(), 7);
//! ```
//!
//! Coordinates follow raster conventions: X grows to the right and Y grows downward. A glyph's
//! *origin* is its baseline reference point, so ink above the baseline has negative Y in
//! origin-relative rectangles such as [`AtlasFont::glyph_bbox`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Builds `peniko` with the standard library.
//! - `libm`: Builds `peniko` with [libm] instead, for `no_std` targets.
//! - `png`: Enables [`Pixmap::save_png`] for inspecting rendered output.
//! - `vello_common`: Implements [`Canvas`] for Vello's CPU `Pixmap`.
//!
//! These only pass through to `peniko`'s features of the same names; this crate itself does
//! no floating point math.
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use peniko;

mod atlas;
mod bitmap;
mod canvas;
mod error;
mod font;
mod geom;
mod hex;
mod layout;
mod metrics;
mod source;
mod surface;
#[cfg(feature = "vello_common")]
mod vello;

pub use atlas::Atlas;
pub use bitmap::Bitmap;
pub use canvas::{Canvas, GlyphImage, Pixmap};
pub use error::{Error, ErrorKind};
pub use font::AtlasFont;
pub use geom::{Point, Rect};
pub use hex::{draw_char_or_hex_quad, draw_hex_quad};
pub use layout::{Alignment, HAlign, VAlign};
pub use metrics::{GlyphMetrics, MetricsTable};
pub use source::{BitmapFont, FontSource, SourceFontMetrics, SourceGlyph, SourceGlyphMetrics};
pub use surface::{DrawConfig, SurfaceState};
