// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spoken prompts.

/// Language of an utterance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Arabic, Saudi Arabia.
    #[default]
    Arabic,
    /// English, United States.
    English,
}

impl Language {
    /// BCP 47 tag for speech engines.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Arabic => "ar-SA",
            Self::English => "en-US",
        }
    }
}

/// Speaking rate relative to the engine's normal speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeechRate(pub f32);

impl Default for SpeechRate {
    /// Slightly slower than normal, for young listeners.
    fn default() -> Self {
        Self(0.8)
    }
}

/// Something to say.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    /// Text to speak.
    pub text: String,
    /// Language to speak it in.
    pub language: Language,
    /// Speaking rate.
    pub rate: SpeechRate,
}

impl Utterance {
    /// An utterance at the default rate.
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
            rate: SpeechRate::default(),
        }
    }
}

/// Text-to-speech output, implemented by the host.
///
/// A new utterance replaces the one in progress: implementations cancel
/// whatever is still being spoken before starting `utterance`.
pub trait Speaker {
    /// Speaks `utterance`.
    fn speak(&mut self, utterance: Utterance);
}

impl<S: Speaker + ?Sized> Speaker for &mut S {
    fn speak(&mut self, utterance: Utterance) {
        (**self).speak(utterance);
    }
}

/// A [`Speaker`] that keeps the utterance currently "playing".
///
/// Each new utterance replaces the previous one, as a real engine cancels
/// it. Useful for hosts without audio (the last utterance can be shown as a
/// caption) and for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSpeaker {
    last: Option<Utterance>,
}

impl RecordingSpeaker {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The utterance that would currently be playing.
    #[must_use]
    pub fn last(&self) -> Option<&Utterance> {
        self.last.as_ref()
    }

    /// Stops the current utterance, as a host would on leaving the screen.
    pub fn cancel(&mut self) -> Option<Utterance> {
        self.last.take()
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&mut self, utterance: Utterance) {
        log::trace!("speak [{}] {}", utterance.language.tag(), utterance.text);
        self.last = Some(utterance);
    }
}
