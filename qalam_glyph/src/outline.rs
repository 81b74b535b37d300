// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph outlines in font units.

use kurbo::{BezPath, Point};
use ttf_parser::{Face, OutlineBuilder};

use crate::GlyphError;

/// A glyph's outline and horizontal advance, in font units with y pointing up.
#[derive(Clone, Debug)]
pub struct GlyphOutline {
    /// Closed contours, filled with the non-zero rule.
    pub path: BezPath,
    /// Horizontal advance.
    pub advance: f64,
}

/// Supplies glyph outlines and the vertical metrics used to place them.
pub trait OutlineSource {
    /// Font units per em.
    fn units_per_em(&self) -> f64;
    /// Distance from the baseline to the top of the em box (positive).
    fn ascender(&self) -> f64;
    /// Distance from the baseline to the bottom of the em box (negative).
    fn descender(&self) -> f64;
    /// Outline for `ch`, or `None` when the source has no glyph for it.
    ///
    /// Glyphs without contours (such as a space) return an empty path.
    fn outline(&self, ch: char) -> Option<GlyphOutline>;
}

/// A TrueType/OpenType face parsed with `ttf-parser`.
#[derive(Clone, Debug)]
pub struct FontFace<'a> {
    face: Face<'a>,
}

impl<'a> FontFace<'a> {
    /// Parses the first face in `data`.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self, GlyphError> {
        Self::from_bytes_index(data, 0)
    }

    /// Parses face `index` of a font collection.
    pub fn from_bytes_index(data: &'a [u8], index: u32) -> Result<Self, GlyphError> {
        let face = Face::parse(data, index)?;
        Ok(Self { face })
    }

    /// Returns true if the face maps `ch` to a glyph.
    #[must_use]
    pub fn has_glyph(&self, ch: char) -> bool {
        self.face.glyph_index(ch).is_some()
    }
}

impl OutlineSource for FontFace<'_> {
    fn units_per_em(&self) -> f64 {
        f64::from(self.face.units_per_em())
    }

    fn ascender(&self) -> f64 {
        f64::from(self.face.ascender())
    }

    fn descender(&self) -> f64 {
        f64::from(self.face.descender())
    }

    fn outline(&self, ch: char) -> Option<GlyphOutline> {
        let id = self.face.glyph_index(ch)?;
        let mut builder = PathBuilder::default();
        // `None` here means the glyph has no contours, which is still a glyph.
        let _ = self.face.outline_glyph(id, &mut builder);
        let advance = self.face.glyph_hor_advance(id).map_or(0.0, f64::from);
        Some(GlyphOutline {
            path: builder.path,
            advance,
        })
    }
}

/// Collects `ttf-parser` outline callbacks into a [`BezPath`].
#[derive(Default)]
struct PathBuilder {
    path: BezPath,
}

fn point(x: f32, y: f32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

impl OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(point(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(point(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to(point(x1, y1), point(x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.curve_to(point(x1, y1), point(x2, y2), point(x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
