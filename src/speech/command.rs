//! Speech service backed by an external TTS program (`espeak-ng`, `say`, …).
//!
//! One child process per utterance. Starting a new utterance kills the
//! previous child if it is still running, which gives the flush semantics the
//! player relies on.

use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use crate::config::SpeechConfig;
use crate::language::Language;

use super::{SpeechError, SpeechService};

pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
    available: Vec<String>,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    pub fn from_config(config: &SpeechConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            available: config.available_languages.clone(),
            current: Mutex::new(None),
        }
    }

    /// Expand the argument template for one utterance.
    fn expand_args(&self, text: &str, language: Language) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{lang}", language.speech_tag())
                    .replace("{text}", text)
            })
            .collect()
    }

    fn try_speak(&self, text: &str, language: Language) -> Result<(), SpeechError> {
        if self.program.trim().is_empty() {
            return Err(SpeechError::NoProgram);
        }

        let mut current = self.current.lock().unwrap();
        if let Some(previous) = current.take() {
            Self::kill(previous);
        }

        let child = Command::new(&self.program)
            .args(self.expand_args(text, language))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::Spawn {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        *current = Some(child);
        Ok(())
    }

    fn kill(mut child: Child) {
        if let Ok(None) = child.try_wait() {
            let _ = child.kill();
        }
        // Reap so finished utterances do not linger as zombies.
        let _ = child.wait();
    }
}

impl SpeechService for CommandSpeech {
    fn speak(&self, text: &str, language: Language) {
        log::debug!("speech: [{}] {text}", language.speech_tag());
        if let Err(e) = self.try_speak(text, language) {
            log::warn!("speech: {e}");
        }
    }

    fn stop(&self) {
        if let Some(child) = self.current.lock().unwrap().take() {
            Self::kill(child);
        }
    }

    fn is_language_available(&self, language: Language) -> bool {
        self.available.is_empty()
            || self
                .available
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(language.speech_tag()))
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.stop();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
