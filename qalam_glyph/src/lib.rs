// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qalam Glyph: render a reference character as a template buffer.
//!
//! A template is the character a child is asked to trace, drawn filled and
//! centered into a [`PixelBuffer`] of the same size as the practice canvas.
//!
//! - [`OutlineSource`] – anything that can hand out glyph outlines in font
//!   units. [`FontFace`] implements it on top of a `ttf-parser` face.
//! - [`GlyphLayout`] – where and how large the text is placed: by default
//!   the font size is 70% of the canvas width, centered horizontally on the
//!   advance and vertically on the middle of the em box.
//! - [`GlyphRenderer`] – lays out and fills text from a source.
//! - [`TemplateSource`] – the seam practice rounds use to obtain templates,
//!   so they can run against a real font or a synthetic one.
//!
//! ```rust,no_run
//! use qalam_glyph::{FontFace, GlyphRenderer, TemplateSource};
//!
//! let data = std::fs::read("fonts/Tajawal-Bold.ttf")?;
//! let face = FontFace::from_bytes(&data)?;
//! let renderer = GlyphRenderer::new(face);
//! let template = renderer.render_template("ب", 600, 600)?;
//! assert_eq!(template.size(), (600, 600));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod layout;
mod outline;

pub use error::GlyphError;
pub use layout::{GlyphLayout, GlyphRenderer, TemplateSource};
pub use outline::{FontFace, GlyphOutline, OutlineSource};

pub use qalam_raster::PixelBuffer;
