// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Qalam Lesson: the handwriting practice game.
//!
//! A child picks a [`Category`] (Arabic letters, Arabic-Indic digits, English
//! letters or digits), traces each [`Entry`] on a canvas, and asks for a
//! check. [`PracticeRound`] ties the pieces together:
//!
//! - the child's strokes live in a [`qalam_ink::StrokeCapture`] fed by the
//!   host's pointer events through [`PracticeRound::capture_mut`];
//! - [`PracticeRound::check`] renders those strokes and a template of the
//!   current character from any [`TemplateSource`], scores them with
//!   [`qalam_score`], adds the points and speaks a feedback phrase;
//! - every screen change is announced through a host-provided [`Speaker`].
//!
//! ```rust
//! use kurbo::Point;
//! use qalam_glyph::{GlyphError, TemplateSource};
//! use qalam_lesson::{Category, PracticeRound, RecordingSpeaker};
//! use qalam_score::{PixelBuffer, ScoreResult};
//!
//! // A stand-in for a font: every character is a vertical bar.
//! struct Bar;
//!
//! impl TemplateSource for Bar {
//!     fn render_template(
//!         &self,
//!         _: &str,
//!         width: usize,
//!         height: usize,
//!     ) -> Result<PixelBuffer, GlyphError> {
//!         let mut buffer = PixelBuffer::new(width, height);
//!         for y in 150..450 {
//!             for x in 290..310 {
//!                 buffer.set_alpha(x, y, 255);
//!             }
//!         }
//!         Ok(buffer)
//!     }
//! }
//!
//! let mut round = PracticeRound::new(RecordingSpeaker::new());
//! round.select(Category::EnglishNumbers);
//! let said = round.speaker().last().map(|u| u.text.as_str());
//! assert_eq!(said, Some("0 Zero"));
//!
//! let canvas = round.capture_mut();
//! canvas.start_stroke(Point::new(300.0, 150.0));
//! canvas.append_to_stroke(Point::new(300.0, 450.0));
//! canvas.end_stroke();
//!
//! assert_eq!(round.check(&Bar), ScoreResult::Correct);
//! assert_eq!(round.score(), 10);
//! ```

mod content;
mod round;
mod speech;

pub use content::{Category, Entry};
pub use round::{GREETING, PracticeRound, RoundConfig, feedback};
pub use speech::{Language, RecordingSpeaker, Speaker, SpeechRate, Utterance};

pub use qalam_glyph::TemplateSource;
pub use qalam_score::ScoreResult;
