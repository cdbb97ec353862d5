//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// SpeechBackend
// ---------------------------------------------------------------------------

/// Selects how utterances are rendered.
///
/// | Variant  | Behaviour                                          |
/// |----------|----------------------------------------------------|
/// | Console  | Utterances are printed to stdout (no audio)        |
/// | Command  | An external TTS program is spawned per utterance   |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpeechBackend {
    Console,
    Command,
}

impl Default for SpeechBackend {
    fn default() -> Self {
        Self::Console
    }
}

// ---------------------------------------------------------------------------
// SpeechConfig
// ---------------------------------------------------------------------------

/// Settings for the speech service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Which backend to use.
    pub backend: SpeechBackend,
    /// Program spawned by the `Command` backend (e.g. `"espeak-ng"`).
    pub program: String,
    /// Argument template. `{lang}` is replaced with the language tag and
    /// `{text}` with the utterance.
    pub args: Vec<String>,
    /// Language tags the program has voices for. Empty means "assume all".
    pub available_languages: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            backend: SpeechBackend::default(),
            program: "espeak-ng".into(),
            args: vec!["-v".into(), "{lang}".into(), "{text}".into()],
            available_languages: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// TranslationConfig
// ---------------------------------------------------------------------------

/// Settings for the translation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Whether translation requests are sent at all.
    pub enabled: bool,
    /// Base URL of a LibreTranslate-compatible endpoint.
    pub base_url: String,
    /// API key; `None` for self-hosted instances.
    pub api_key: Option<String>,
    /// Maximum seconds to wait for a response before timing out.
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://localhost:5000".into(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// PlaybackConfig
// ---------------------------------------------------------------------------

/// Playback settings that are not user selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Pause used when the saved delay index does not name a known option.
    pub fallback_delay_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fallback_delay_secs: 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use vocab_player::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Speech service settings.
    pub speech: SpeechConfig,
    /// Translation backend settings.
    pub translation: TranslationConfig,
    /// Playback settings.
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
