//! Speech service that prints utterances instead of voicing them.

use crate::language::Language;

use super::SpeechService;

/// Writes each utterance to stdout as `(tag) text`.
#[derive(Debug, Default)]
pub struct ConsoleSpeech;

impl ConsoleSpeech {
    pub fn new() -> Self {
        Self
    }
}

impl SpeechService for ConsoleSpeech {
    fn speak(&self, text: &str, language: Language) {
        log::debug!("speech: [{}] {text}", language.speech_tag());
        println!("  ({}) {text}", language.speech_tag());
    }

    fn stop(&self) {
        log::debug!("speech: stop");
    }
}
