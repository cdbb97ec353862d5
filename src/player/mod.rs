//! Playback sequencer.
//!
//! Walks a snapshot of word pairs and voices each eligible pair as
//! original → pause → translation → pause.
//!
//! # Architecture
//!
//! ```text
//! Sequencer::play(snapshot, settings)
//!        │
//!        ▼
//! walk task (tokio::spawn)
//!        │
//!        ├─ skip ineligible pairs (no delay, no speech)
//!        ├─ Highlight{i}, speak(original, source)   → AwaitingTranslationUtterance
//!        ├─ sleep(delay), speak(translated, target) → AwaitingAdvance
//!        ├─ sleep(delay), Unhighlight{i}            → Playing{i+1}
//!        └─ past the end → Stopped{Completed}       → Idle
//!
//! Sequencer::stop() → bump generation, abort task, Stopped{Requested} → Idle
//! ```
//!
//! Every resumption point re-checks the session generation under the lock
//! before speaking or advancing, so nothing is voiced after `stop()`.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//! use vocab_player::player::{PlaybackSettings, Sequencer};
//! use vocab_player::speech::ConsoleSpeech;
//! use vocab_player::store::WordPair;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (events_tx, mut events_rx) = mpsc::unbounded_channel();
//!     let sequencer = Sequencer::new(Arc::new(ConsoleSpeech::new()), events_tx);
//!
//!     let pairs = vec![WordPair::new("hello", "hola"), WordPair::new("cat", "gato")];
//!     sequencer.play(pairs, PlaybackSettings::default()).unwrap();
//!
//!     while let Some(event) = events_rx.recv().await {
//!         println!("{event:?}");
//!     }
//! }
//! ```

pub mod sequencer;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use sequencer::{EventSender, PlaybackError, Sequencer};
pub use state::{PlaybackSettings, PlaybackState, PlayerEvent, StopReason};
