// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing and filling text into a template buffer.

use kurbo::{Affine, BezPath};
use qalam_raster::{FillRule, PixelBuffer, fill_path};

use crate::{GlyphError, OutlineSource};

/// Placement of template text on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphLayout {
    /// Font size as a fraction of the buffer width.
    pub font_scale: f64,
}

impl Default for GlyphLayout {
    fn default() -> Self {
        Self { font_scale: 0.7 }
    }
}

/// Produces template buffers for practice rounds.
pub trait TemplateSource {
    /// Renders `text` into a new `width × height` buffer.
    fn render_template(
        &self,
        text: &str,
        width: usize,
        height: usize,
    ) -> Result<PixelBuffer, GlyphError>;
}

/// Renders text from an [`OutlineSource`] with a [`GlyphLayout`].
#[derive(Clone, Debug)]
pub struct GlyphRenderer<S> {
    source: S,
    layout: GlyphLayout,
}

impl<S: OutlineSource> GlyphRenderer<S> {
    /// Creates a renderer with the default layout.
    pub fn new(source: S) -> Self {
        Self::with_layout(source, GlyphLayout::default())
    }

    /// Creates a renderer with a custom layout.
    pub const fn with_layout(source: S, layout: GlyphLayout) -> Self {
        Self { source, layout }
    }

    /// The outline source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The layout in use.
    pub const fn layout(&self) -> GlyphLayout {
        self.layout
    }

    /// Lays out `text` for a `width × height` canvas and returns the filled
    /// outline in pixel space (y down).
    ///
    /// Characters are placed left to right by advance, without shaping or
    /// kerning; templates are single characters or short digit runs.
    pub fn outline_text(
        &self,
        text: &str,
        width: usize,
        height: usize,
    ) -> Result<BezPath, GlyphError> {
        if text.is_empty() {
            return Err(GlyphError::Empty);
        }
        let glyphs = text
            .chars()
            .map(|ch| self.source.outline(ch).ok_or(GlyphError::Missing(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        let font_size = width as f64 * self.layout.font_scale;
        let scale = font_size / self.source.units_per_em();
        let total_advance: f64 = glyphs.iter().map(|g| g.advance).sum::<f64>() * scale;

        // Center on the advance box horizontally and on the middle of the em
        // box vertically; font units are y-up, pixels are y-down.
        let em_middle = (self.source.ascender() + self.source.descender()) / 2.0;
        let baseline = height as f64 / 2.0 + em_middle * scale;
        let mut pen_x = width as f64 / 2.0 - total_advance / 2.0;

        let mut out = BezPath::new();
        for glyph in &glyphs {
            let to_pixels = Affine::new([scale, 0.0, 0.0, -scale, pen_x, baseline]);
            let mut path = glyph.path.clone();
            path.apply_affine(to_pixels);
            out.extend(path.elements().iter().copied());
            pen_x += glyph.advance * scale;
        }
        Ok(out)
    }
}

impl<S: OutlineSource> TemplateSource for GlyphRenderer<S> {
    fn render_template(
        &self,
        text: &str,
        width: usize,
        height: usize,
    ) -> Result<PixelBuffer, GlyphError> {
        let path = self.outline_text(text, width, height)?;
        let mut buffer = PixelBuffer::new(width, height);
        fill_path(&mut buffer, &path, FillRule::NonZero);
        log::debug!(
            "rendered template {text:?} at {width}x{height}: {} ink pixels",
            buffer.count_above(0)
        );
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlyphOutline;
    use kurbo::Rect;
    use kurbo::Shape as _;

    /// A font whose only glyph, `I`, is a 300×700 bar on a 500-unit advance.
    struct BarFont;

    impl OutlineSource for BarFont {
        fn units_per_em(&self) -> f64 {
            1000.0
        }

        fn ascender(&self) -> f64 {
            800.0
        }

        fn descender(&self) -> f64 {
            -200.0
        }

        fn outline(&self, ch: char) -> Option<GlyphOutline> {
            match ch {
                'I' => Some(GlyphOutline {
                    path: Rect::new(100.0, 0.0, 400.0, 700.0).to_path(0.1),
                    advance: 500.0,
                }),
                ' ' => Some(GlyphOutline {
                    path: BezPath::new(),
                    advance: 250.0,
                }),
                _ => None,
            }
        }
    }

    fn ink_columns(b: &PixelBuffer) -> (usize, usize) {
        let cols: Vec<usize> = b.pixels().filter(|p| p.2 > 50).map(|p| p.0).collect();
        (
            cols.iter().copied().min().unwrap_or(0),
            cols.iter().copied().max().unwrap_or(0),
        )
    }

    #[test]
    fn glyph_is_centered_and_sized_from_width() {
        let r = GlyphRenderer::new(BarFont);
        let b = r.render_template("I", 100, 100).expect("glyph exists");
        // Font size 70px: the bar spans x 39.5..60.5 and y 22..71.
        assert_eq!(ink_columns(&b), (39, 60));
        assert_eq!(b.alpha_at(50, 22), 255);
        assert_eq!(b.alpha_at(50, 70), 255);
        assert_eq!(b.alpha_at(50, 21), 0);
        assert_eq!(b.alpha_at(50, 71), 0);
        assert_eq!(b.alpha_at(39, 40), 128);
    }

    #[test]
    fn runs_are_centered_as_a_group() {
        let r = GlyphRenderer::new(BarFont);
        let b = r.render_template("II", 100, 100).expect("glyphs exist");
        // Two advances of 35px centered: pens at 15 and 50.
        assert_eq!(b.alpha_at(30, 40), 255);
        assert_eq!(b.alpha_at(65, 40), 255);
        assert_eq!(b.alpha_at(45, 40), 0);
    }

    #[test]
    fn missing_and_empty_text_are_errors() {
        let r = GlyphRenderer::new(BarFont);
        assert!(matches!(
            r.render_template("X", 10, 10),
            Err(GlyphError::Missing('X'))
        ));
        assert!(matches!(r.render_template("", 10, 10), Err(GlyphError::Empty)));
    }

    #[test]
    fn blank_glyphs_render_nothing() {
        let r = GlyphRenderer::new(BarFont);
        let b = r.render_template(" ", 50, 50).expect("space exists");
        assert_eq!(b.count_above(0), 0);
    }

    #[test]
    fn layout_scale_is_configurable() {
        let r = GlyphRenderer::with_layout(BarFont, GlyphLayout { font_scale: 0.35 });
        let b = r.render_template("I", 100, 100).expect("glyph exists");
        let (left, right) = ink_columns(&b);
        assert!(right - left < 12, "half-size bar spans {left}..={right}");
    }
}
