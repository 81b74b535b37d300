// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while loading a font or rendering a template.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The font data could not be parsed.
    #[error("failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
    /// The font has no glyph for this character.
    #[error("font has no glyph for {0:?}")]
    Missing(char),
    /// There was nothing to render.
    #[error("no text to render")]
    Empty,
}
