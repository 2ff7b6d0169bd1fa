// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod pixels;

pub(crate) use pixels::{assert_pixmaps_eq, from_vello, paint_glyph};

use bitglyph::{AtlasFont, DrawConfig};
use peniko::Color;

/// Returns the current function name (for use in test naming).
#[macro_export]
macro_rules! test_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        let name = &name[name.rfind(':').map(|x| x + 1).unwrap_or(0)..];

        name
    }};
}

/// The sample Latin font, drawing transparently in `foreground`.
pub(crate) fn sample_font(foreground: Color) -> AtlasFont {
    AtlasFont::with_config(
        &bitglyph_dev::sample_font(),
        DrawConfig {
            foreground,
            ..DrawConfig::default()
        },
    )
}

/// The minihex font with default attributes.
pub(crate) fn minihex() -> AtlasFont {
    AtlasFont::new(&bitglyph_dev::minihex())
}
