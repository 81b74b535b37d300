// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tracing game loop.

use qalam_glyph::TemplateSource;
use qalam_ink::{StrokeCapture, StrokeStyle, render_drawing};
use qalam_score::{ScoreParams, ScoreResult};

use crate::{Category, Entry, Language, Speaker, Utterance};

/// Spoken on the category screen.
pub const GREETING: &str = "هيا بنا نتعلم الكتابة! اختر قسماً لنبدأ المغامرة";

/// Feedback phrase for each result.
#[must_use]
pub const fn feedback(result: ScoreResult) -> &'static str {
    match result {
        ScoreResult::Correct => "ممتاز! رسم رائع",
        ScoreResult::Close => "قريب جداً! بطل",
        ScoreResult::Wrong => "حاول مرة أخرى يا بطل",
    }
}

/// Canvas and judging settings for a round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundConfig {
    /// Canvas width in pixels. Drawing and template share it.
    pub canvas_width: usize,
    /// Canvas height in pixels.
    pub canvas_height: usize,
    /// Brush used to render the child's strokes.
    pub stroke: StrokeStyle,
    /// Scoring thresholds.
    pub score: ScoreParams,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 600,
            stroke: StrokeStyle::default(),
            score: ScoreParams::default(),
        }
    }
}

/// State of one practice session: category, current character, the child's
/// drawing, the last result and the running score.
///
/// Every transition that shows something new also says it through the
/// [`Speaker`].
#[derive(Debug)]
pub struct PracticeRound<S> {
    config: RoundConfig,
    speaker: S,
    category: Option<Category>,
    index: usize,
    capture: StrokeCapture,
    result: Option<ScoreResult>,
    score: u32,
    show_hint: bool,
}

impl<S: Speaker> PracticeRound<S> {
    /// Opens the category screen with the default configuration.
    pub fn new(speaker: S) -> Self {
        Self::with_config(speaker, RoundConfig::default())
    }

    /// Opens the category screen with `config`.
    pub fn with_config(speaker: S, config: RoundConfig) -> Self {
        let mut round = Self {
            config,
            speaker,
            category: None,
            index: 0,
            capture: StrokeCapture::new(),
            result: None,
            score: 0,
            show_hint: true,
        };
        round.greet();
        round
    }

    /// Starts practicing `category` from its first character.
    pub fn select(&mut self, category: Category) {
        self.category = Some(category);
        self.index = 0;
        self.clear();
        self.speak_current();
    }

    /// Returns to the category screen. The score is kept.
    pub fn leave(&mut self) {
        self.category = None;
        self.index = 0;
        self.clear();
        self.greet();
    }

    /// Moves to the next character, wrapping after the last.
    pub fn next(&mut self) {
        self.step(|index, len| (index + 1) % len);
    }

    /// Moves to the previous character, wrapping before the first.
    pub fn previous(&mut self) {
        self.step(|index, len| (index + len - 1) % len);
    }

    /// Jumps to the character at `index` in the selected category.
    ///
    /// Returns false, changing nothing, on the category screen or when
    /// `index` is out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        match self.category {
            Some(category) if index < category.entries().len() => {
                self.step(|_, _| index);
                true
            }
            _ => false,
        }
    }

    fn step(&mut self, advance: impl FnOnce(usize, usize) -> usize) {
        let Some(category) = self.category else {
            return;
        };
        self.index = advance(self.index, category.entries().len());
        self.clear();
        self.speak_current();
    }

    /// Erases the drawing and the last result.
    pub fn clear(&mut self) {
        self.capture.clear();
        self.result = None;
    }

    /// Judges the drawing against `templates`' rendering of the current
    /// character, then awards points and speaks the feedback.
    ///
    /// On the category screen this is [`ScoreResult::Wrong`] and changes
    /// nothing. A template that cannot be rendered also scores `Wrong`.
    pub fn check<T: TemplateSource + ?Sized>(&mut self, templates: &T) -> ScoreResult {
        let Some(entry) = self.current() else {
            return ScoreResult::Wrong;
        };
        let RoundConfig {
            canvas_width: width,
            canvas_height: height,
            ..
        } = self.config;

        let drawing = render_drawing(
            self.capture.drawing(),
            self.capture.current(),
            width,
            height,
            &self.config.stroke,
        );
        let template = templates
            .render_template(entry.glyph, width, height)
            .inspect_err(|err| log::warn!("cannot render template {:?}: {err}", entry.glyph))
            .ok();
        let assessment = qalam_score::check(template.as_ref(), Some(&drawing), &self.config.score);
        let result = assessment.result;
        log::debug!("{:?}: {result:?} from {:?}", entry.glyph, assessment.tally);

        self.score += result.points();
        self.result = Some(result);
        let phrase = Utterance::new(feedback(result), Language::Arabic);
        self.speaker.speak(phrase);
        result
    }

    /// Reads the current character aloud again.
    pub fn speak_current(&mut self) {
        let (Some(category), Some(entry)) = (self.category, self.current()) else {
            return;
        };
        let utterance = Utterance::new(entry.spoken_text(), category.language());
        self.speaker.speak(utterance);
    }

    fn greet(&mut self) {
        let greeting = Utterance::new(GREETING, Language::Arabic);
        self.speaker.speak(greeting);
    }
}

impl<S> PracticeRound<S> {
    /// The selected category, or `None` on the category screen.
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// The character being practiced.
    pub fn current(&self) -> Option<&'static Entry> {
        self.category?.entries().get(self.index)
    }

    /// Position of the current character in its category.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The child's strokes.
    pub const fn capture(&self) -> &StrokeCapture {
        &self.capture
    }

    /// Pointer events go here.
    pub const fn capture_mut(&mut self) -> &mut StrokeCapture {
        &mut self.capture
    }

    /// Result of the last check, cleared whenever the drawing is.
    pub const fn result(&self) -> Option<ScoreResult> {
        self.result
    }

    /// Points earned this session.
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Whether the faint template is shown behind the canvas.
    pub const fn show_hint(&self) -> bool {
        self.show_hint
    }

    /// Shows or hides the faint template. Scoring is unaffected.
    pub const fn set_show_hint(&mut self, show: bool) {
        self.show_hint = show;
    }

    /// The configuration in use.
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The speaker.
    pub const fn speaker(&self) -> &S {
        &self.speaker
    }
}
