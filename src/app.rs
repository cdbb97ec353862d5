//! Application controller: the operations a front end triggers.
//!
//! # Architecture
//!
//! [`VocabApp`] owns the [`PairStore`], the user's selections and the
//! [`Sequencer`]. A front end calls one method per gesture and renders what
//! comes back on two channels:
//!
//! * `player`: [`PlayerEvent`]s from the sequencer (highlight, stop, …).
//! * `translations`: [`TranslationOutcome`]s from spawned translation
//!   requests, to be fed back through [`VocabApp::apply_translation`].
//!
//! Every mutation of pairs or selections is saved immediately.
//!
//! | Gesture                    | Method                          |
//! |----------------------------|---------------------------------|
//! | type in a row              | [`set_original`](VocabApp::set_original) |
//! | tap translate              | [`request_translation`](VocabApp::request_translation) |
//! | tap delete                 | [`remove`](VocabApp::remove)    |
//! | tap add                    | [`add_row`](VocabApp::add_row)  |
//! | tap a translation          | [`preview`](VocabApp::preview)  |
//! | play / stop                | [`play`](VocabApp::play) / [`stop`](VocabApp::stop) |
//! | pick languages / delay     | `set_*`                         |

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::language::{delay_for_index, Language, DELAY_OPTIONS};
use crate::player::{PlaybackError, PlaybackSettings, PlayerEvent, Sequencer};
use crate::speech::SpeechService;
use crate::store::{
    PairId, PairStore, Preferences, PreferencesStore, Removal, StoreError, WordPair,
};
use crate::translate::{TranslationError, Translator};

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("row {0} has no word to translate")]
    EmptyWord(usize),

    #[error("delay option {0} does not exist")]
    InvalidDelay(usize),
}

// ---------------------------------------------------------------------------
// Translation messages
// ---------------------------------------------------------------------------

/// Result of a translation request, tagged with the row it was made for.
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub id: PairId,
    /// The word that was sent for translation.
    pub original: String,
    pub result: Result<String, TranslationError>,
}

/// A translation outcome that still matched its row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUpdate {
    /// Current index of the row.
    pub index: usize,
    /// On error the row stays untranslated; the front end shows the message.
    pub result: Result<String, TranslationError>,
}

/// Receiving ends a front end listens on.
pub struct AppChannels {
    pub player: mpsc::UnboundedReceiver<PlayerEvent>,
    pub translations: mpsc::UnboundedReceiver<TranslationOutcome>,
}

// ---------------------------------------------------------------------------
// VocabApp
// ---------------------------------------------------------------------------

pub struct VocabApp {
    store: PairStore,
    preferences: PreferencesStore,
    from_language: Language,
    to_language: Language,
    delay_index: usize,
    fallback_delay_secs: f64,
    sequencer: Sequencer,
    speech: Arc<dyn SpeechService>,
    translator: Arc<dyn Translator>,
    translation_tx: mpsc::UnboundedSender<TranslationOutcome>,
}

impl VocabApp {
    /// Restore saved state from `preferences` and wire up the services.
    ///
    /// If nothing was saved the store starts with one empty row.
    pub fn load(
        config: &AppConfig,
        preferences: PreferencesStore,
        speech: Arc<dyn SpeechService>,
        translator: Arc<dyn Translator>,
    ) -> (Self, AppChannels) {
        let Preferences {
            from_language_index,
            to_language_index,
            delay_index,
            pairs,
        } = preferences.load();

        let mut store = PairStore::from_pairs(pairs);
        if store.is_empty() {
            store.add(WordPair::default());
        }

        let (player_tx, player_rx) = mpsc::unbounded_channel();
        let (translation_tx, translation_rx) = mpsc::unbounded_channel();

        let app = Self {
            store,
            preferences,
            from_language: Language::from_index(from_language_index),
            to_language: Language::from_index(to_language_index),
            delay_index,
            fallback_delay_secs: config.playback.fallback_delay_secs,
            sequencer: Sequencer::new(Arc::clone(&speech), player_tx),
            speech,
            translator,
            translation_tx,
        };

        log::info!(
            "app: loaded {} rows ({} → {}, {:?} delay)",
            app.store.len(),
            app.from_language,
            app.to_language,
            app.delay()
        );

        let channels = AppChannels {
            player: player_rx,
            translations: translation_rx,
        };
        (app, channels)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn pairs(&self) -> &PairStore {
        &self.store
    }

    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    pub fn from_language(&self) -> Language {
        self.from_language
    }

    pub fn to_language(&self) -> Language {
        self.to_language
    }

    pub fn delay_index(&self) -> usize {
        self.delay_index
    }

    pub fn delay(&self) -> std::time::Duration {
        delay_for_index(self.delay_index, self.fallback_delay_secs)
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Settings for the next play or preview.
    pub fn settings(&self) -> PlaybackSettings {
        PlaybackSettings {
            source: self.from_language,
            target: self.to_language,
            delay: self.delay(),
        }
    }

    /// Selected languages the speech service has no voice for.
    pub fn missing_voices(&self) -> Vec<Language> {
        let mut missing = Vec::new();
        for lang in [self.from_language, self.to_language] {
            if !self.speech.is_language_available(lang) && !missing.contains(&lang) {
                log::warn!("app: language not supported by speech service: {lang}");
                missing.push(lang);
            }
        }
        missing
    }

    // -----------------------------------------------------------------------
    // Rows
    // -----------------------------------------------------------------------

    /// Append an empty row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.store.add(WordPair::default());
        self.save();
        self.store.len() - 1
    }

    /// Append a filled row and return its index.
    pub fn add_pair(&mut self, pair: WordPair) -> usize {
        self.store.add(pair);
        self.save();
        self.store.len() - 1
    }

    /// Replace the word in row `index`. A different word drops the old
    /// translation.
    pub fn set_original(&mut self, index: usize, text: &str) -> Result<(), AppError> {
        self.store.update(index, Some(text.to_string()), None)?;
        self.save();
        Ok(())
    }

    /// Delete row `index`, or clear it when it is the last row.
    pub fn remove(&mut self, index: usize) -> Result<Removal, AppError> {
        let removal = self.store.remove(index)?;
        self.save();
        Ok(removal)
    }

    // -----------------------------------------------------------------------
    // Translation
    // -----------------------------------------------------------------------

    /// Translate row `index` in the background.
    ///
    /// The outcome arrives on `AppChannels::translations`.
    pub fn request_translation(&self, index: usize) -> Result<(), AppError> {
        let pair = self
            .store
            .get(index)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })?;
        if pair.original.trim().is_empty() {
            return Err(AppError::EmptyWord(index));
        }
        let id = self
            .store
            .id_at(index)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })?;

        let original = pair.original.clone();
        let (from, to) = (self.from_language, self.to_language);
        let translator = Arc::clone(&self.translator);
        let tx = self.translation_tx.clone();

        log::debug!("app: translating row {index} ({} → {})", from.code(), to.code());
        tokio::spawn(async move {
            let result = translator.translate(&original, from, to).await;
            let _ = tx.send(TranslationOutcome {
                id,
                original,
                result,
            });
        });
        Ok(())
    }

    /// Apply a finished translation if its row still exists with the same
    /// word. Stale outcomes are dropped and return `None`.
    pub fn apply_translation(&mut self, outcome: TranslationOutcome) -> Option<TranslationUpdate> {
        let TranslationOutcome {
            id,
            original,
            result,
        } = outcome;

        let index = self.store.index_of(id)?;
        if self.store.get(index).map(|p| p.original.as_str()) != Some(original.as_str()) {
            log::debug!("app: dropping translation for edited row {index}");
            return None;
        }

        match &result {
            Ok(translated) => {
                self.store
                    .apply_translation(id, &original, translated.clone())?;
                self.save();
            }
            Err(e) => log::warn!("app: row {index}: {e}"),
        }

        Some(TranslationUpdate { index, result })
    }

    // -----------------------------------------------------------------------
    // Playback
    // -----------------------------------------------------------------------

    /// Play every row from the top using the current selections.
    pub fn play(&self) -> Result<(), AppError> {
        log::debug!(
            "app: {} of {} rows playable",
            self.store.eligible_count(),
            self.store.len()
        );
        self.sequencer.play(self.store.snapshot(), self.settings())?;
        Ok(())
    }

    pub fn stop(&self) {
        self.sequencer.stop();
    }

    /// Voice row `index` once.
    pub fn preview(&self, index: usize) -> Result<(), AppError> {
        let pair = self
            .store
            .get(index)
            .cloned()
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })?;
        self.sequencer.preview(index, pair, self.settings())?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Selections
    // -----------------------------------------------------------------------

    pub fn set_from_language(&mut self, language: Language) {
        self.from_language = language;
        self.save();
    }

    pub fn set_to_language(&mut self, language: Language) {
        self.to_language = language;
        self.save();
    }

    pub fn set_delay_index(&mut self, index: usize) -> Result<(), AppError> {
        if index >= DELAY_OPTIONS.len() {
            return Err(AppError::InvalidDelay(index));
        }
        self.delay_index = index;
        self.save();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Write pairs and selections. Failures are logged, never fatal.
    pub fn save(&self) {
        let prefs = Preferences {
            from_language_index: self.from_language.index(),
            to_language_index: self.to_language.index(),
            delay_index: self.delay_index,
            pairs: self.store.snapshot(),
        };
        if let Err(e) = self.preferences.save(&prefs) {
            log::warn!("app: could not save word pairs: {e}");
        }
    }

    /// Stop playback and persist; call before exiting.
    pub fn shutdown(&self) {
        self.stop();
        self.save();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
