// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification results.

use crate::InkTally;

/// How well a drawing matches the reference glyph.
///
/// Variants are ordered from worst to best, so `Wrong < Close < Correct`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScoreResult {
    /// Too sparse, too little of the glyph traced, or too much stray ink.
    Wrong,
    /// Recognizably the glyph, but loosely traced.
    Close,
    /// A good trace.
    Correct,
}

impl ScoreResult {
    /// Points awarded for this result.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Correct => 10,
            Self::Close => 5,
            Self::Wrong => 0,
        }
    }
}

/// A result together with the counts that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assessment {
    /// The classification.
    pub result: ScoreResult,
    /// Ink counts, or `None` when the buffers could not be compared.
    pub tally: Option<InkTally>,
}
