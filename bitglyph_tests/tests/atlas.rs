// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas packing and glyph metrics, checked against the sample font's source data.

use bitglyph::{AtlasFont, FontSource, Point, Rect};
use bitglyph_dev::{BOX_INDEX, CROSS_INDEX, sample_font};

#[test]
fn atlas_presence_matches_source() {
    let source = sample_font();
    let font = AtlasFont::new(&source);
    assert_eq!(
        font.glyph_index_limit(),
        source.glyph_index_limit(),
        "index limit"
    );
    for index in 0..font.glyph_index_limit() {
        let present = source.glyph(index).is_some();
        let index = index as u32;
        assert_eq!(font.has_glyph(index), present, "presence of glyph {index}");
        if !present {
            assert_eq!(font.glyph_bbox(index), Rect::ZERO, "bbox of absent {index}");
            assert_eq!(font.glyph_advance(index), Point::ZERO, "advance of absent {index}");
        }
    }
    assert!(!font.has_glyph(256), "at the limit");
    assert_eq!(font.max_valid_index(), Some(CROSS_INDEX), "max index");
}

#[test]
fn atlas_metrics_round_trip() {
    let source = sample_font();
    let font = AtlasFont::new(&source);
    for (index, glyph) in source.glyphs() {
        let size = glyph.metrics.bbox_size;
        let offset = glyph.metrics.bbox_offset;
        let bbox = font.glyph_bbox(index as u32);
        assert_eq!(
            Point::new(bbox.width(), bbox.height()),
            size,
            "size of glyph {index}"
        );
        assert_eq!(bbox.left(), offset.x, "left of glyph {index}");
        assert_eq!(
            bbox.top(),
            -size.y + 1 - offset.y,
            "top of glyph {index}"
        );
    }
}

#[test]
fn atlas_descender() {
    let font = AtlasFont::new(&sample_font());
    let j = u32::from(b'j');
    assert_eq!(font.glyph_bbox(j), Rect::new(0, -4, 4, 7), "j relative box");

    let metrics = font.glyph_metrics(j).unwrap();
    assert_eq!(metrics.bbox, Rect::new(23, 0, 4, 7), "j packed after i");
    assert_eq!(metrics.origin, Point::new(23, 4), "origin two rows above the bottom");
}

#[test]
fn atlas_advances() {
    let font = AtlasFont::new(&sample_font());
    assert_eq!(
        font.glyph_advance(BOX_INDEX),
        Point::new(4, -2),
        "source Y up becomes atlas Y down"
    );
    assert_eq!(font.glyph_advance(u32::from(b'i')), Point::new(3, 0), "own advance");
    assert_eq!(font.glyph_advance(u32::from(b'A')), Point::new(8, 0), "default advance");
    assert_eq!(font.glyph_advance(u32::from(b' ')), Point::new(8, 0), "space advance");
}

#[test]
fn atlas_packing() {
    let font = AtlasFont::new(&sample_font());
    let atlas = font.atlas();
    assert_eq!(atlas.mask().width(), 2 + 3 * 5 + 5 + 1 + 4 + 3, "sum of widths");
    assert_eq!(atlas.mask().height(), 7, "tallest glyph");

    let lefts: Vec<_> = atlas
        .metrics()
        .iter()
        .map(|(index, m)| (index, m.bbox.left()))
        .collect();
    assert_eq!(
        lefts,
        [
            (1, 0),
            (32, 2),
            (65, 2),
            (66, 7),
            (67, 12),
            (95, 17),
            (105, 22),
            (106, 23),
            (200, 27)
        ],
        "glyphs packed left to right in index order"
    );

    let space = font.glyph_metrics(u32::from(b' ')).unwrap();
    assert!(space.bbox.is_empty(), "space costs no pixels");
}

#[test]
fn atlas_pixels_match_source() {
    let source = sample_font();
    let font = AtlasFont::new(&source);
    let mask = font.atlas().mask();
    let mut ink = 0;
    for (index, glyph) in source.glyphs() {
        let Some(bitmap) = &glyph.bitmap else {
            continue;
        };
        let left = font.glyph_metrics(index as u32).unwrap().bbox.left() as u32;
        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                assert_eq!(
                    mask.get(left + x, y),
                    bitmap.get(x, y),
                    "glyph {index} pixel ({x}, {y})"
                );
            }
        }
        ink += bitmap.count_ones();
    }
    assert_eq!(mask.count_ones(), ink, "nothing outside glyph boxes");
}

#[test]
fn atlas_font_bbox_and_nominal() {
    let font = AtlasFont::new(&sample_font());
    // A-C reach 6 above the baseline; j and _ reach 2 below.
    assert_eq!(font.font_bbox(), Rect::new(0, -6, 5, 9), "font box");

    assert_eq!(font.nominal_advance(), Point::new(8, 0), "box width");
    assert_eq!(
        font.nominal_cell(Point::new(40, 30)),
        Rect::new(40, 22, 8, 12),
        "default box with 3 rows below the baseline"
    );
}
