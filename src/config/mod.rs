//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the speech and
//! translation backends, `AppPaths` for cross-platform data directories, and
//! TOML persistence via `AppConfig::load` / `AppConfig::save`.
//!
//! User data (word pairs, language and delay selections) is not part of the
//! config; it lives in [`crate::store::Preferences`].

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, PlaybackConfig, SpeechBackend, SpeechConfig, TranslationConfig};
