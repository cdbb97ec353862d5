//! Bilingual vocabulary flashcard player.
//!
//! The user builds an ordered list of word pairs, translates each word through
//! a [`translate::Translator`], and plays the list back through a
//! [`speech::SpeechService`]: original word, pause, translated word, pause,
//! next pair.
//!
//! [`app::VocabApp`] is the entry point for front ends; it owns the
//! [`store::PairStore`] and drives the [`player::Sequencer`].

pub mod app;
pub mod command;
pub mod config;
pub mod language;
pub mod player;
pub mod speech;
pub mod store;
pub mod translate;
