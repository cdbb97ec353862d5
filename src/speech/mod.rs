//! Speech service boundary.
//!
//! The player never renders audio itself. It hands each utterance to a
//! [`SpeechService`] and moves on; the service decides how to voice it.
//!
//! # Contract
//!
//! - [`speak`](SpeechService::speak) is fire-and-forget and must not block
//!   for the length of the utterance.
//! - A new `speak` **flushes** any utterance still playing. The player only
//!   spaces utterances by a fixed delay, so a queueing service would let
//!   long words pile up and overlap.
//! - [`stop`](SpeechService::stop) silences whatever is playing.
//!
//! Implementations:
//!
//! * [`ConsoleSpeech`] prints utterances, no audio.
//! * [`CommandSpeech`] spawns an external TTS program per utterance.
//! * `MockSpeechService` (under `#[cfg(test)]`) records calls with
//!   timestamps for the player tests.

pub mod command;
pub mod console;

pub use command::CommandSpeech;
pub use console::ConsoleSpeech;

use std::sync::Arc;

use thiserror::Error;

use crate::config::{SpeechBackend, SpeechConfig};
use crate::language::Language;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SpeechError {
    /// No program configured for the command backend.
    #[error("no speech program configured")]
    NoProgram,

    /// The external program could not be started.
    #[error("cannot start speech program {program:?}: {reason}")]
    Spawn { program: String, reason: String },
}

// ---------------------------------------------------------------------------
// SpeechService trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe text-to-speech boundary.
pub trait SpeechService: Send + Sync {
    /// Start speaking `text` in `language`, interrupting any current utterance.
    fn speak(&self, text: &str, language: Language);

    /// Silence the current utterance, if any.
    fn stop(&self);

    /// Whether a voice exists for `language`.
    fn is_language_available(&self, _language: Language) -> bool {
        true
    }
}

// Compile-time assertion: Box<dyn SpeechService> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechService>) {}
};

/// Build the speech service selected in `config`.
pub fn from_config(config: &SpeechConfig) -> Arc<dyn SpeechService> {
    match config.backend {
        SpeechBackend::Console => Arc::new(ConsoleSpeech::new()),
        SpeechBackend::Command => Arc::new(CommandSpeech::from_config(config)),
    }
}

// ---------------------------------------------------------------------------
// MockSpeechService  (test-only)
// ---------------------------------------------------------------------------

/// One recorded [`SpeechService::speak`] call.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub language: Language,
    pub at: tokio::time::Instant,
}

/// Records every call; timestamps use tokio's clock so paused-time tests can
/// measure the gaps between utterances.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockSpeechService {
    spoken: std::sync::Mutex<Vec<Utterance>>,
    stops: std::sync::atomic::AtomicUsize,
    unavailable: Vec<Language>,
}

#[cfg(test)]
impl MockSpeechService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that reports `languages` as having no voice.
    pub fn without_voices(languages: Vec<Language>) -> Self {
        Self {
            unavailable: languages,
            ..Self::default()
        }
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.spoken().into_iter().map(|u| u.text).collect()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl SpeechService for MockSpeechService {
    fn speak(&self, text: &str, language: Language) {
        self.spoken.lock().unwrap().push(Utterance {
            text: text.to_string(),
            language,
            at: tokio::time::Instant::now(),
        });
    }

    fn stop(&self) {
        self.stops.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn is_language_available(&self, language: Language) -> bool {
        !self.unavailable.contains(&language)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
