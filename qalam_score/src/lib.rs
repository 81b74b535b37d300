// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qalam Score: judge a traced drawing against a reference glyph.
//!
//! The scorer compares two same-sized [`PixelBuffer`]s: the **template**, a
//! rendered reference character, and the **drawing**, the child's rendered
//! strokes. A pixel is *ink* when its alpha exceeds
//! [`ScoreParams::ink_threshold`].
//!
//! Scoring happens in two steps:
//!
//! 1. [`InkTally::measure`] counts template ink, drawn ink, their direct
//!    overlap, and *outside* ink: drawn pixels off the template that have no
//!    template ink within [`ScoreParams::tolerance`] pixels along both axes.
//! 2. [`ScoreParams::classify`] turns the tally into a [`ScoreResult`]:
//!    - too little ink drawn (less than [`ScoreParams::min_drawn_fraction`] of
//!      the template) is [`ScoreResult::Wrong`];
//!    - otherwise `coverage = matched / template` and
//!      `outside = outside / drawn` pick the first matching class:
//!      `coverage > 0.30 && outside < 0.60` is [`ScoreResult::Correct`],
//!      `coverage > 0.15 && outside < 0.80` is [`ScoreResult::Close`],
//!      and anything else is [`ScoreResult::Wrong`].
//!
//! [`score_buffers`] and [`check`] wrap both steps and fail safe: a missing
//! buffer, mismatched sizes, or an empty template all yield
//! [`ScoreResult::Wrong`]. The feedback is for a child, so "try again" beats
//! an error.
//!
//! The neighbourhood test uses a summed-area table ([`qalam_raster::NearInk`]),
//! so a full 600×600 check costs a few passes over the pixels regardless of
//! the tolerance. [`InkTally::measure_brute`] keeps the direct scan as a
//! reference; both produce identical tallies.
//!
//! # Example
//!
//! ```rust
//! use qalam_raster::PixelBuffer;
//! use qalam_score::{ScoreParams, ScoreResult, score_buffers};
//!
//! let mut template = PixelBuffer::new(100, 100);
//! for y in 30..55 {
//!     for x in 30..70 {
//!         template.set_alpha(x, y, 255);
//!     }
//! }
//! // Tracing the whole glyph is a perfect match.
//! let drawing = template.clone();
//!
//! let result = score_buffers(Some(&template), Some(&drawing), &ScoreParams::default());
//! assert_eq!(result, ScoreResult::Correct);
//! assert_eq!(result.points(), 10);
//!
//! // Nothing to compare against reads as "try again".
//! let result = score_buffers(None, Some(&drawing), &ScoreParams::default());
//! assert_eq!(result, ScoreResult::Wrong);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`ScoreParams`],
//!   [`InkTally`] and [`ScoreResult`], so hosts can load tuning from config.
//!
//! This crate is `no_std`.

#![no_std]

mod params;
mod result;
mod tally;

pub use params::ScoreParams;
pub use result::{Assessment, ScoreResult};
pub use tally::InkTally;

pub use qalam_raster::PixelBuffer;

/// Scores `drawing` against `template`, failing safe to [`ScoreResult::Wrong`].
///
/// Either buffer may be missing (not rendered yet); that and a size mismatch
/// both classify as `Wrong`.
#[must_use]
pub fn score_buffers(
    template: Option<&PixelBuffer>,
    drawing: Option<&PixelBuffer>,
    params: &ScoreParams,
) -> ScoreResult {
    check(template, drawing, params).result
}

/// Like [`score_buffers`], but also returns the tally the result came from.
///
/// The tally is `None` when scoring could not run.
#[must_use]
pub fn check(
    template: Option<&PixelBuffer>,
    drawing: Option<&PixelBuffer>,
    params: &ScoreParams,
) -> Assessment {
    let tally = match (template, drawing) {
        (Some(t), Some(d)) => InkTally::measure(t, d, params),
        _ => None,
    };
    Assessment {
        result: tally.map_or(ScoreResult::Wrong, |t| params.classify(&t)),
        tally,
    }
}
