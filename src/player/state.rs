//! Playback state machine types.
//!
//! [`PlaybackState`] is what the [`Sequencer`](super::Sequencer) is doing
//! right now. [`PlayerEvent`]s are what a front end observes: it highlights
//! and scrolls on `Highlight`, and clears highlighting on `Unhighlight` and
//! `Stopped`.

use std::time::Duration;

use crate::language::Language;
use crate::store::WordPair;

// ---------------------------------------------------------------------------
// PlaybackState
// ---------------------------------------------------------------------------

/// States of the playback sequencer.
///
/// ```text
/// Idle ──play (non-empty)──▶ Playing{i}
/// Playing{i} ──pair i ineligible──▶ Playing{i+1}
/// Playing{i} ──pair i eligible: speak original──▶ AwaitingTranslationUtterance{i}
///            ──delay, speak translation──▶ AwaitingAdvance{i}
///            ──delay──▶ Playing{i+1}
/// Playing{len} ──▶ Idle            (natural completion)
/// any state ──stop──▶ Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing is playing.
    Idle,

    /// Evaluating the pair at `index`.
    Playing { index: usize },

    /// The original word of pair `index` was spoken; waiting to speak the
    /// translation.
    AwaitingTranslationUtterance { index: usize },

    /// The translation of pair `index` was spoken; waiting to move on.
    AwaitingAdvance { index: usize },
}

impl PlaybackState {
    /// Returns `true` while a playback walk is in progress.
    ///
    /// ```
    /// use vocab_player::player::PlaybackState;
    ///
    /// assert!(!PlaybackState::Idle.is_playing());
    /// assert!(PlaybackState::Playing { index: 0 }.is_playing());
    /// assert!(PlaybackState::AwaitingAdvance { index: 3 }.is_playing());
    /// ```
    pub fn is_playing(&self) -> bool {
        !matches!(self, PlaybackState::Idle)
    }

    /// A short human-readable label suitable for a status line.
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Playing { .. } => "Playing",
            PlaybackState::AwaitingTranslationUtterance { .. } => "Speaking word",
            PlaybackState::AwaitingAdvance { .. } => "Speaking translation",
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState::Idle
    }
}

// ---------------------------------------------------------------------------
// PlayerEvent
// ---------------------------------------------------------------------------

/// Why playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `stop()` was called.
    Requested,
    /// The walk ran past the last pair.
    Completed,
}

/// Notifications sent to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Playback of a snapshot with `total` pairs began.
    Started { total: usize },
    /// Pair `index` is now active. Any earlier highlight is superseded.
    ///
    /// `pair` is the pair being voiced, taken from the playback snapshot, so
    /// it stays correct even if the list was edited since playback started.
    Highlight { index: usize, pair: WordPair },
    /// Pair `index` finished.
    Unhighlight { index: usize },
    /// Playback ended; clear all highlighting.
    Stopped { reason: StopReason },
    /// `play()` was called with an empty list.
    NothingToPlay,
}

// ---------------------------------------------------------------------------
// PlaybackSettings
// ---------------------------------------------------------------------------

/// Session-wide settings captured when playback (or a preview) starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    /// Language of `WordPair::original`.
    pub source: Language,
    /// Language of `WordPair::translated`.
    pub target: Language,
    /// Pause after each utterance.
    pub delay: Duration,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            source: Language::English,
            target: Language::Spanish,
            delay: Duration::from_secs(2),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
