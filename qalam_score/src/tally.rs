// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ink counting.

use qalam_raster::{InkMask, NearInk, PixelBuffer};

use crate::ScoreParams;

/// Ink counts for one template/drawing pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkTally {
    /// Template pixels that are ink.
    pub template_ink: usize,
    /// Drawing pixels that are ink.
    pub drawn_ink: usize,
    /// Pixels that are ink in both buffers.
    pub matched_ink: usize,
    /// Drawn ink off the template with no template ink within the tolerance
    /// window.
    pub outside_ink: usize,
}

impl InkTally {
    /// Counts ink in `template` and `drawing`.
    ///
    /// Returns `None` when the buffers differ in size.
    #[must_use]
    pub fn measure(
        template: &PixelBuffer,
        drawing: &PixelBuffer,
        params: &ScoreParams,
    ) -> Option<Self> {
        let mask = InkMask::from_buffer(template, params.ink_threshold);
        let near = NearInk::new(&mask);
        Self::measure_with(&mask, drawing, params, |x, y| {
            near.any_within(x, y, params.tolerance)
        })
    }

    /// Same as [`InkTally::measure`], but scans each stray pixel's window
    /// directly instead of using a summed-area table.
    ///
    /// This is O(stray pixels × tolerance²); it exists as the reference the
    /// fast path is checked against.
    #[must_use]
    pub fn measure_brute(
        template: &PixelBuffer,
        drawing: &PixelBuffer,
        params: &ScoreParams,
    ) -> Option<Self> {
        let mask = InkMask::from_buffer(template, params.ink_threshold);
        Self::measure_with(&mask, drawing, params, |x, y| {
            mask.any_within_brute(x, y, params.tolerance)
        })
    }

    fn measure_with(
        mask: &InkMask,
        drawing: &PixelBuffer,
        params: &ScoreParams,
        near_template: impl Fn(usize, usize) -> bool,
    ) -> Option<Self> {
        if (mask.width(), mask.height()) != drawing.size() {
            return None;
        }
        let mut tally = Self {
            template_ink: mask.count(),
            ..Self::default()
        };
        for (x, y, alpha) in drawing.pixels() {
            if alpha <= params.ink_threshold {
                continue;
            }
            tally.drawn_ink += 1;
            if mask.is_ink(x, y) {
                tally.matched_ink += 1;
            } else if !near_template(x, y) {
                tally.outside_ink += 1;
            }
        }
        Some(tally)
    }

    /// Fraction of template ink also drawn, or `None` without template ink.
    #[must_use]
    pub fn coverage_ratio(&self) -> Option<f64> {
        (self.template_ink > 0).then(|| self.matched_ink as f64 / self.template_ink as f64)
    }

    /// Fraction of drawn ink far from the template, or `None` without drawn
    /// ink.
    #[must_use]
    pub fn outside_ratio(&self) -> Option<f64> {
        (self.drawn_ink > 0).then(|| self.outside_ink as f64 / self.drawn_ink as f64)
    }
}
