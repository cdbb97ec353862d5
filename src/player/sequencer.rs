//! Sequencer: drives speech through a snapshot of word pairs.
//!
//! [`Sequencer`] owns the playback session and reports progress as
//! [`PlayerEvent`]s over an unbounded `tokio::sync::mpsc` channel. It is
//! cheap to clone; clones share the same session.
//!
//! Two timelines exist:
//!
//! * the **walk**, started by [`play`](Sequencer::play), which owns
//!   `current_index`;
//! * the **preview**, started by [`preview`](Sequencer::preview), which
//!   voices one pair and never touches `current_index` or the playing flag.
//!
//! Each has its own generation counter. [`stop`](Sequencer::stop) and natural
//! completion bump both, so they cancel a running preview as well as the
//! walk. A new preview bumps only the preview counter, superseding the
//! previous preview.

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::speech::SpeechService;
use crate::store::WordPair;

use super::state::{PlaybackSettings, PlaybackState, PlayerEvent, StopReason};

/// Channel end the sequencer publishes events on.
pub type EventSender = mpsc::UnboundedSender<PlayerEvent>;

// ---------------------------------------------------------------------------
// PlaybackError
// ---------------------------------------------------------------------------

/// Reasons a playback request is declined. None of them change any state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("No word pairs to play")]
    NothingToPlay,

    #[error("playback is already running")]
    AlreadyPlaying,

    #[error("word pair {0} has no translation to play")]
    NotEligible(usize),
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Session {
    state: PlaybackState,
    current_index: usize,
    generation: u64,
    preview_generation: u64,
    walk: Option<JoinHandle<()>>,
    preview: Option<JoinHandle<()>>,
}

struct Shared {
    session: Mutex<Session>,
    speech: Arc<dyn SpeechService>,
    events: EventSender,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap()
    }

    fn emit(&self, event: PlayerEvent) {
        // A closed channel just means nobody is watching.
        let _ = self.events.send(event);
    }

    /// Return to `Idle`, cancelling any preview. Called with the session
    /// lock held.
    fn finish(&self, session: &mut Session, reason: StopReason) {
        session.generation += 1;
        session.preview_generation += 1;
        if let Some(preview) = session.preview.take() {
            preview.abort();
        }
        session.state = PlaybackState::Idle;
        session.current_index = 0;
        self.speech.stop();
        self.emit(PlayerEvent::Stopped { reason });
    }
}

// ---------------------------------------------------------------------------
// Sequencer
// ---------------------------------------------------------------------------

/// The playback state machine.
///
/// Must be used from within a tokio runtime: [`play`](Self::play) and
/// [`preview`](Self::preview) spawn tasks.
#[derive(Clone)]
pub struct Sequencer {
    shared: Arc<Shared>,
}

impl Sequencer {
    /// Create an idle sequencer voicing through `speech` and reporting on
    /// `events`.
    pub fn new(speech: Arc<dyn SpeechService>, events: EventSender) -> Self {
        Self {
            shared: Arc::new(Shared {
                session: Mutex::new(Session::default()),
                speech,
                events,
            }),
        }
    }

    /// Start walking `snapshot` from index 0.
    ///
    /// # Errors
    ///
    /// - [`PlaybackError::AlreadyPlaying`] if a walk is in progress; nothing
    ///   changes.
    /// - [`PlaybackError::NothingToPlay`] if `snapshot` is empty; a
    ///   [`PlayerEvent::NothingToPlay`] is emitted and the state stays `Idle`.
    pub fn play(
        &self,
        snapshot: Vec<WordPair>,
        settings: PlaybackSettings,
    ) -> Result<(), PlaybackError> {
        let mut session = self.shared.lock();

        if session.state.is_playing() {
            log::debug!("player: play ignored, already {}", session.state.label());
            return Err(PlaybackError::AlreadyPlaying);
        }

        if snapshot.is_empty() {
            log::info!("player: nothing to play");
            self.shared.emit(PlayerEvent::NothingToPlay);
            return Err(PlaybackError::NothingToPlay);
        }

        session.generation += 1;
        session.current_index = 0;
        session.state = PlaybackState::Playing { index: 0 };

        log::info!(
            "player: playing {} pairs ({} → {}, {:?} delay)",
            snapshot.len(),
            settings.source.code(),
            settings.target.code(),
            settings.delay
        );
        self.shared.emit(PlayerEvent::Started {
            total: snapshot.len(),
        });

        let task = walk(
            Arc::clone(&self.shared),
            session.generation,
            snapshot,
            settings,
        );
        session.walk = Some(tokio::spawn(task));
        Ok(())
    }

    /// Voice a single pair once, highlighting `index` while it plays.
    ///
    /// Does not read or change `current_index` and works whether or not a
    /// walk is running. Cancelled by [`stop`](Self::stop) and by a later
    /// preview.
    pub fn preview(
        &self,
        index: usize,
        pair: WordPair,
        settings: PlaybackSettings,
    ) -> Result<(), PlaybackError> {
        if !pair.is_eligible() {
            return Err(PlaybackError::NotEligible(index));
        }

        let mut session = self.shared.lock();
        session.preview_generation += 1;
        if let Some(previous) = session.preview.take() {
            previous.abort();
        }

        log::debug!("player: preview pair {index}");
        self.shared.emit(PlayerEvent::Highlight {
            index,
            pair: pair.clone(),
        });
        self.shared.speech.speak(&pair.original, settings.source);

        let task = preview(
            Arc::clone(&self.shared),
            session.preview_generation,
            index,
            pair,
            settings,
        );
        session.preview = Some(tokio::spawn(task));
        Ok(())
    }

    /// Stop playback and any preview.
    ///
    /// Pending steps never run, the speech service is silenced, a
    /// `Stopped { reason: Requested }` event clears highlighting, and
    /// `current_index` returns to 0. Safe to call when idle.
    pub fn stop(&self) {
        let mut session = self.shared.lock();

        if let Some(walk) = session.walk.take() {
            walk.abort();
        }

        log::info!("player: stop (was {})", session.state.label());
        self.shared.finish(&mut session, StopReason::Requested);
    }

    pub fn state(&self) -> PlaybackState {
        self.shared.lock().state
    }

    pub fn is_playing(&self) -> bool {
        self.state().is_playing()
    }

    pub fn current_index(&self) -> usize {
        self.shared.lock().current_index
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// The playback walk. Each block that touches the session first checks that
/// `generation` is still current; the lock is never held across an await.
async fn walk(
    shared: Arc<Shared>,
    generation: u64,
    snapshot: Vec<WordPair>,
    settings: PlaybackSettings,
) {
    loop {
        let index = {
            let mut session = shared.lock();
            if session.generation != generation {
                return;
            }

            let mut index = session.current_index;
            while index < snapshot.len() && !snapshot[index].is_eligible() {
                log::debug!("player: skipping pair {index}");
                index += 1;
            }

            if index >= snapshot.len() {
                log::info!("player: finished");
                session.walk = None;
                shared.finish(&mut session, StopReason::Completed);
                return;
            }

            session.current_index = index;
            session.state = PlaybackState::AwaitingTranslationUtterance { index };
            shared.emit(PlayerEvent::Highlight {
                index,
                pair: snapshot[index].clone(),
            });
            shared.speech.speak(&snapshot[index].original, settings.source);
            index
        };

        tokio::time::sleep(settings.delay).await;

        {
            let mut session = shared.lock();
            if session.generation != generation {
                return;
            }
            session.state = PlaybackState::AwaitingAdvance { index };
            shared
                .speech
                .speak(&snapshot[index].translated, settings.target);
        }

        tokio::time::sleep(settings.delay).await;

        {
            let mut session = shared.lock();
            if session.generation != generation {
                return;
            }
            shared.emit(PlayerEvent::Unhighlight { index });
            session.current_index = index + 1;
            session.state = PlaybackState::Playing { index: index + 1 };
        }
    }
}

/// The single-pair preview. The original word was already spoken by
/// [`Sequencer::preview`].
async fn preview(
    shared: Arc<Shared>,
    generation: u64,
    index: usize,
    pair: WordPair,
    settings: PlaybackSettings,
) {
    tokio::time::sleep(settings.delay).await;

    {
        let session = shared.lock();
        if session.preview_generation != generation {
            return;
        }
        shared.speech.speak(&pair.translated, settings.target);
    }

    tokio::time::sleep(settings.delay).await;

    let mut session = shared.lock();
    if session.preview_generation != generation {
        return;
    }
    session.preview = None;
    shared.emit(PlayerEvent::Unhighlight { index });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::speech::MockSpeechService;
    use crate::store::PLACEHOLDER;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn settings(delay_secs: f64) -> PlaybackSettings {
        PlaybackSettings {
            source: Language::Spanish,
            target: Language::English,
            delay: Duration::from_secs_f64(delay_secs),
        }
    }

    fn make_sequencer() -> (Sequencer, Arc<MockSpeechService>, UnboundedReceiver<PlayerEvent>) {
        let speech = Arc::new(MockSpeechService::new());
        let (tx, rx) = mpsc::unbounded_channel();
        let seq = Sequencer::new(Arc::clone(&speech) as Arc<dyn SpeechService>, tx);
        (seq, speech, rx)
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<WordPair> {
        items.iter().map(|(o, t)| WordPair::new(*o, *t)).collect()
    }

    /// Receive events until playback stops (paused clock auto-advances).
    async fn until_stopped(rx: &mut UnboundedReceiver<PlayerEvent>) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            let done = matches!(event, PlayerEvent::Stopped { .. });
            events.push(event);
            if done {
                break;
            }
        }
        events
    }

    fn drain(rx: &mut UnboundedReceiver<PlayerEvent>) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn highlight(index: usize, original: &str, translated: &str) -> PlayerEvent {
        PlayerEvent::Highlight {
            index,
            pair: WordPair::new(original, translated),
        }
    }

    fn highlighted(events: &[PlayerEvent]) -> Vec<usize> {
        events
            .iter()
            .filter_map(|e| match e {
                PlayerEvent::Highlight { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    async fn advance(secs: f64) {
        tokio::time::sleep(Duration::from_secs_f64(secs)).await;
    }

    // -----------------------------------------------------------------------
    // Walk
    // -----------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn plays_eligible_pairs_once_in_order() {
        let (seq, speech, mut rx) = make_sequencer();
        let snapshot = pairs(&[
            ("hola", "hello"),
            ("", "orphan"),
            ("gato", ""),
            ("perro", "dog"),
            ("casa", PLACEHOLDER),
            ("sol", "sun"),
        ]);

        seq.play(snapshot, settings(1.0)).unwrap();
        let events = until_stopped(&mut rx).await;

        assert_eq!(highlighted(&events), vec![0, 3, 5]);
        assert_eq!(
            speech.texts(),
            vec!["hola", "hello", "perro", "dog", "sol", "sun"]
        );
        assert_eq!(events.first(), Some(&PlayerEvent::Started { total: 6 }));
        assert_eq!(
            events.last(),
            Some(&PlayerEvent::Stopped {
                reason: StopReason::Completed
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn utterances_use_source_then_target_language() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("hola", "hello")]), settings(1.0)).unwrap();
        until_stopped(&mut rx).await;

        let spoken = speech.spoken();
        assert_eq!(spoken[0].language, Language::Spanish);
        assert_eq!(spoken[1].language, Language::English);
    }

    #[tokio::test(start_paused = true)]
    async fn each_highlight_is_followed_by_its_unhighlight() {
        let (seq, _speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one"), ("dos", "two")]), settings(1.0))
            .unwrap();
        let events = until_stopped(&mut rx).await;

        assert_eq!(
            events,
            vec![
                PlayerEvent::Started { total: 2 },
                highlight(0, "uno", "one"),
                PlayerEvent::Unhighlight { index: 0 },
                highlight(1, "dos", "two"),
                PlayerEvent::Unhighlight { index: 1 },
                PlayerEvent::Stopped {
                    reason: StopReason::Completed
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn delays_separate_utterances_and_advancement() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("hola", "hello"), ("gato", "cat")]), settings(2.0))
            .unwrap();
        until_stopped(&mut rx).await;

        let spoken = speech.spoken();
        assert_eq!(spoken.len(), 4);
        let two = Duration::from_secs(2);
        // original → translation
        assert!(spoken[1].at - spoken[0].at >= two);
        // translation → next pair
        assert!(spoken[2].at - spoken[1].at >= two);
        assert!(spoken[3].at - spoken[2].at >= two);
    }

    #[tokio::test(start_paused = true)]
    async fn skipped_pairs_cost_no_time() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(
            pairs(&[("uno", "one"), ("dos", ""), ("tres", ""), ("cuatro", "four")]),
            settings(1.0),
        )
        .unwrap();
        until_stopped(&mut rx).await;

        let spoken = speech.spoken();
        assert_eq!(spoken[2].text, "cuatro");
        // One delay after "one", not three.
        assert!(spoken[2].at - spoken[1].at < Duration::from_millis(1_500));
    }

    #[tokio::test(start_paused = true)]
    async fn completion_resets_to_idle() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one")]), settings(1.0)).unwrap();
        assert!(seq.is_playing());
        until_stopped(&mut rx).await;

        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(speech.stop_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn all_ineligible_completes_without_speech() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", ""), ("dos", PLACEHOLDER)]), settings(1.0))
            .unwrap();
        let events = until_stopped(&mut rx).await;

        assert!(speech.spoken().is_empty());
        assert_eq!(
            events,
            vec![
                PlayerEvent::Started { total: 2 },
                PlayerEvent::Stopped {
                    reason: StopReason::Completed
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn state_tracks_the_two_waits() {
        let (seq, _speech, _rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one"), ("dos", "two")]), settings(2.0))
            .unwrap();
        assert_eq!(seq.state(), PlaybackState::Playing { index: 0 });

        advance(1.0).await;
        assert_eq!(
            seq.state(),
            PlaybackState::AwaitingTranslationUtterance { index: 0 }
        );

        advance(2.0).await;
        assert_eq!(seq.state(), PlaybackState::AwaitingAdvance { index: 0 });

        advance(2.0).await;
        assert_eq!(
            seq.state(),
            PlaybackState::AwaitingTranslationUtterance { index: 1 }
        );
        assert_eq!(seq.current_index(), 1);
    }

    // -----------------------------------------------------------------------
    // play() guards
    // -----------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn empty_snapshot_reports_nothing_to_play() {
        let (seq, speech, mut rx) = make_sequencer();
        assert_eq!(
            seq.play(Vec::new(), settings(1.0)),
            Err(PlaybackError::NothingToPlay)
        );
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(drain(&mut rx), vec![PlayerEvent::NothingToPlay]);
        assert!(speech.spoken().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn play_while_playing_is_a_no_op() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one")]), settings(1.0)).unwrap();
        assert_eq!(
            seq.play(pairs(&[("dos", "two")]), settings(1.0)),
            Err(PlaybackError::AlreadyPlaying)
        );
        until_stopped(&mut rx).await;

        assert_eq!(speech.texts(), vec!["uno", "one"]);
    }

    #[tokio::test(start_paused = true)]
    async fn can_play_again_after_completion() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one")]), settings(1.0)).unwrap();
        until_stopped(&mut rx).await;
        seq.play(pairs(&[("dos", "two")]), settings(1.0)).unwrap();
        until_stopped(&mut rx).await;

        assert_eq!(speech.texts(), vec!["uno", "one", "dos", "two"]);
    }

    // -----------------------------------------------------------------------
    // stop()
    // -----------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn stop_during_first_delay_silences_the_rest() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one"), ("dos", "two")]), settings(2.0))
            .unwrap();

        advance(1.0).await;
        seq.stop();
        advance(30.0).await;

        assert_eq!(speech.texts(), vec!["uno"]);
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(
            drain(&mut rx),
            vec![
                PlayerEvent::Started { total: 2 },
                highlight(0, "uno", "one"),
                PlayerEvent::Stopped {
                    reason: StopReason::Requested
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stop_during_second_delay_does_not_advance() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one"), ("dos", "two")]), settings(2.0))
            .unwrap();

        advance(3.0).await;
        assert_eq!(seq.current_index(), 0);
        seq.stop();
        advance(30.0).await;

        assert_eq!(speech.texts(), vec!["uno", "one"]);
        let events = drain(&mut rx);
        assert!(!events.contains(&PlayerEvent::Unhighlight { index: 0 }));
        assert_eq!(highlighted(&events), vec![0]);
        assert_eq!(seq.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_mid_list_resets_index() {
        let (seq, _speech, _rx) = make_sequencer();
        seq.play(
            pairs(&[("uno", "one"), ("dos", "two"), ("tres", "three")]),
            settings(1.0),
        )
        .unwrap();

        advance(2.5).await;
        assert_eq!(seq.current_index(), 1);
        seq.stop();
        assert_eq!(seq.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_then_play_starts_from_the_top() {
        let (seq, speech, mut rx) = make_sequencer();
        let list = pairs(&[("uno", "one"), ("dos", "two")]);
        seq.play(list.clone(), settings(1.0)).unwrap();
        advance(2.5).await;
        seq.stop();
        drain(&mut rx);

        seq.play(list, settings(1.0)).unwrap();
        let events = until_stopped(&mut rx).await;

        assert_eq!(highlighted(&events), vec![0, 1]);
        assert_eq!(
            speech.texts(),
            vec!["uno", "one", "dos", "uno", "one", "dos", "two"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stop_silences_speech_and_is_safe_when_idle() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.stop();
        assert_eq!(speech.stop_count(), 1);
        assert_eq!(
            drain(&mut rx),
            vec![PlayerEvent::Stopped {
                reason: StopReason::Requested
            }]
        );
    }

    // -----------------------------------------------------------------------
    // preview()
    // -----------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn preview_speaks_one_pair_and_unhighlights() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.preview(2, WordPair::new("gato", "cat"), settings(2.0))
            .unwrap();

        advance(5.0).await;

        let spoken = speech.spoken();
        assert_eq!(speech.texts(), vec!["gato", "cat"]);
        assert!(spoken[1].at - spoken[0].at >= Duration::from_secs(2));
        assert_eq!(
            drain(&mut rx),
            vec![
                highlight(2, "gato", "cat"),
                PlayerEvent::Unhighlight { index: 2 },
            ]
        );
        assert_eq!(seq.state(), PlaybackState::Idle);
        assert_eq!(seq.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn preview_rejects_untranslated_pair() {
        let (seq, speech, mut rx) = make_sequencer();
        assert_eq!(
            seq.preview(0, WordPair::new("gato", PLACEHOLDER), settings(1.0)),
            Err(PlaybackError::NotEligible(0))
        );
        assert!(speech.spoken().is_empty());
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_preview() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.preview(0, WordPair::new("gato", "cat"), settings(2.0))
            .unwrap();

        advance(1.0).await;
        seq.stop();
        advance(10.0).await;

        assert_eq!(speech.texts(), vec!["gato"]);
        assert_eq!(
            drain(&mut rx),
            vec![
                highlight(0, "gato", "cat"),
                PlayerEvent::Stopped {
                    reason: StopReason::Requested
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn newer_preview_supersedes_older() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.preview(0, WordPair::new("gato", "cat"), settings(2.0))
            .unwrap();
        advance(1.0).await;
        seq.preview(1, WordPair::new("perro", "dog"), settings(2.0))
            .unwrap();
        advance(10.0).await;

        assert_eq!(speech.texts(), vec!["gato", "perro", "dog"]);
        assert_eq!(
            drain(&mut rx),
            vec![
                highlight(0, "gato", "cat"),
                highlight(1, "perro", "dog"),
                PlayerEvent::Unhighlight { index: 1 },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn preview_during_playback_leaves_walk_untouched() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one"), ("dos", "two")]), settings(2.0))
            .unwrap();
        advance(1.0).await;
        seq.preview(5, WordPair::new("gato", "cat"), settings(2.0))
            .unwrap();

        assert_eq!(seq.current_index(), 0);
        assert!(seq.is_playing());

        let events = until_stopped(&mut rx).await;
        assert_eq!(highlighted(&events), vec![0, 5, 1]);
        assert!(speech.texts().contains(&"cat".to_string()));
        assert_eq!(
            events.last(),
            Some(&PlayerEvent::Stopped {
                reason: StopReason::Completed
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn completion_cancels_a_running_preview() {
        let (seq, speech, mut rx) = make_sequencer();
        seq.play(pairs(&[("uno", "one")]), settings(2.0)).unwrap();
        advance(3.5).await;
        seq.preview(5, WordPair::new("gato", "cat"), settings(2.0))
            .unwrap();
        advance(10.0).await;

        assert_eq!(speech.texts(), vec!["uno", "one", "gato"]);
        assert_eq!(
            drain(&mut rx),
            vec![
                PlayerEvent::Started { total: 1 },
                highlight(0, "uno", "one"),
                highlight(5, "gato", "cat"),
                PlayerEvent::Unhighlight { index: 0 },
                PlayerEvent::Stopped {
                    reason: StopReason::Completed
                },
            ]
        );
    }

    #[test]
    fn playback_error_display() {
        assert_eq!(PlaybackError::NothingToPlay.to_string(), "No word pairs to play");
        assert!(PlaybackError::NotEligible(3).to_string().contains('3'));
    }
}
