//! Word pair model and the ordered pair store.
//!
//! [`PairStore`] is the single source of truth for the list the user edits.
//! Front ends render it; the [`Sequencer`](crate::player::Sequencer) only ever
//! sees an owned [`snapshot`](PairStore::snapshot) taken when playback starts.
//!
//! Every entry carries a [`PairId`] that survives reordering caused by
//! removals, so asynchronous results (translations) can find their row again
//! or notice that it is gone.

pub mod codec;
pub mod preferences;

pub use codec::{decode_json, decode_record, encode_json, encode_records, RecordError};
pub use preferences::{Preferences, PreferencesError, PreferencesStore};

use thiserror::Error;

/// Text a front end shows in place of a missing translation.
///
/// A pair whose `translated` field holds this text is treated as untranslated.
pub const PLACEHOLDER: &str = "Translation will appear here";

// ---------------------------------------------------------------------------
// WordPair
// ---------------------------------------------------------------------------

/// One flashcard: a word and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordPair {
    pub original: String,
    pub translated: String,
}

impl WordPair {
    pub fn new(original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: translated.into(),
        }
    }

    /// `true` when the pair can be spoken: both sides present and the
    /// translation is real text rather than the placeholder.
    ///
    /// ```
    /// use vocab_player::store::{WordPair, PLACEHOLDER};
    ///
    /// assert!(WordPair::new("gato", "cat").is_eligible());
    /// assert!(!WordPair::new("gato", "").is_eligible());
    /// assert!(!WordPair::new("gato", PLACEHOLDER).is_eligible());
    /// ```
    pub fn is_eligible(&self) -> bool {
        !self.original.is_empty() && self.has_translation()
    }

    /// `true` when `translated` holds real text.
    pub fn has_translation(&self) -> bool {
        !self.translated.is_empty() && self.translated != PLACEHOLDER
    }

    /// `true` when both fields are empty.
    pub fn is_blank(&self) -> bool {
        self.original.is_empty() && self.translated.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PairId
// ---------------------------------------------------------------------------

/// Stable identity of a store entry, independent of its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairId(u64);

// ---------------------------------------------------------------------------
// StoreError / Removal
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no word pair at index {index} (store has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// What [`PairStore::remove`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The entry was removed; carries the removed pair.
    Removed(WordPair),
    /// The entry was the only one, so its fields were cleared instead.
    Cleared,
}

// ---------------------------------------------------------------------------
// PairStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Entry {
    id: PairId,
    pair: WordPair,
}

/// Ordered, duplicate-friendly collection of word pairs.
#[derive(Debug, Clone, Default)]
pub struct PairStore {
    entries: Vec<Entry>,
    next_id: u64,
}

impl PairStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from pairs in the given order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = WordPair>) -> Self {
        let mut store = Self::new();
        for pair in pairs {
            store.add(pair);
        }
        store
    }

    /// Append `pair` and return its id. No deduplication.
    pub fn add(&mut self, pair: WordPair) -> PairId {
        let id = PairId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, pair });
        id
    }

    /// Remove the entry at `index`.
    ///
    /// The last remaining entry is never removed: its fields are cleared so a
    /// front end always has one editable row.
    pub fn remove(&mut self, index: usize) -> Result<Removal, StoreError> {
        self.check(index)?;
        if self.entries.len() == 1 {
            self.entries[0].pair = WordPair::default();
            return Ok(Removal::Cleared);
        }
        Ok(Removal::Removed(self.entries.remove(index).pair))
    }

    /// Partially update the entry at `index`.
    ///
    /// Replacing `original` without supplying `translated` clears the old
    /// translation, since it no longer describes the new word.
    pub fn update(
        &mut self,
        index: usize,
        original: Option<String>,
        translated: Option<String>,
    ) -> Result<(), StoreError> {
        self.check(index)?;
        let pair = &mut self.entries[index].pair;
        if let Some(original) = original {
            if original != pair.original && translated.is_none() {
                pair.translated.clear();
            }
            pair.original = original;
        }
        if let Some(translated) = translated {
            pair.translated = translated;
        }
        Ok(())
    }

    /// Store a translation for entry `id`, but only if that entry still exists
    /// and its original text is still `expected_original`.
    ///
    /// Returns the entry's current index when the translation was applied.
    pub fn apply_translation(
        &mut self,
        id: PairId,
        expected_original: &str,
        translated: String,
    ) -> Option<usize> {
        let index = self.index_of(id)?;
        let pair = &mut self.entries[index].pair;
        if pair.original != expected_original {
            return None;
        }
        pair.translated = translated;
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&WordPair> {
        self.entries.get(index).map(|e| &e.pair)
    }

    pub fn id_at(&self, index: usize) -> Option<PairId> {
        self.entries.get(index).map(|e| e.id)
    }

    pub fn index_of(&self, id: PairId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordPair> {
        self.entries.iter().map(|e| &e.pair)
    }

    /// Owned copy of the pairs in order, for playback.
    pub fn snapshot(&self) -> Vec<WordPair> {
        self.iter().cloned().collect()
    }

    /// Number of pairs playback would actually speak.
    pub fn eligible_count(&self) -> usize {
        self.iter().filter(|p| p.is_eligible()).count()
    }

    fn check(&self, index: usize) -> Result<(), StoreError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
