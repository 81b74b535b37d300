// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoring thresholds.

use crate::{InkTally, ScoreResult};

/// Thresholds for measuring and classifying a drawing.
///
/// The defaults are the tuned values the practice game ships with. They are
/// empirical; keep them unless you are deliberately retuning the game.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreParams {
    /// A pixel is ink when its alpha is strictly greater than this (0–255).
    pub ink_threshold: u8,
    /// Radius, in pixels along each axis, within which a stray drawn pixel
    /// still counts as near the template.
    pub tolerance: usize,
    /// Drawings with fewer ink pixels than this fraction of the template's
    /// ink are judged too sparse to evaluate.
    pub min_drawn_fraction: f64,
    /// Coverage must exceed this for [`ScoreResult::Correct`].
    pub correct_coverage: f64,
    /// Outside ratio must stay below this for [`ScoreResult::Correct`].
    pub correct_outside: f64,
    /// Coverage must exceed this for [`ScoreResult::Close`].
    pub close_coverage: f64,
    /// Outside ratio must stay below this for [`ScoreResult::Close`].
    pub close_outside: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            ink_threshold: 50,
            tolerance: 40,
            min_drawn_fraction: 0.05,
            correct_coverage: 0.30,
            correct_outside: 0.60,
            close_coverage: 0.15,
            close_outside: 0.80,
        }
    }
}

impl ScoreParams {
    /// Classifies a tally. First matching rule wins:
    ///
    /// 1. no template ink, or drawn ink below
    ///    `template_ink × min_drawn_fraction` → [`ScoreResult::Wrong`];
    /// 2. `coverage > correct_coverage` and `outside < correct_outside` →
    ///    [`ScoreResult::Correct`];
    /// 3. `coverage > close_coverage` and `outside < close_outside` →
    ///    [`ScoreResult::Close`];
    /// 4. otherwise [`ScoreResult::Wrong`].
    #[must_use]
    pub fn classify(&self, tally: &InkTally) -> ScoreResult {
        if tally.template_ink == 0 {
            return ScoreResult::Wrong;
        }
        if (tally.drawn_ink as f64) < tally.template_ink as f64 * self.min_drawn_fraction {
            return ScoreResult::Wrong;
        }
        let (Some(coverage), Some(outside)) = (tally.coverage_ratio(), tally.outside_ratio())
        else {
            return ScoreResult::Wrong;
        };

        if coverage > self.correct_coverage && outside < self.correct_outside {
            ScoreResult::Correct
        } else if coverage > self.close_coverage && outside < self.close_outside {
            ScoreResult::Close
        } else {
            ScoreResult::Wrong
        }
    }
}
