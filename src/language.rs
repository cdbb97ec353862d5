//! Supported languages and playback delay options.
//!
//! The order of [`Language::ALL`] and [`DELAY_OPTIONS`] is persisted as plain
//! indices (see [`crate::store::Preferences`]), so entries must only ever be
//! appended.

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// A language the user can pick as translation source or target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Japanese,
    Korean,
    Chinese,
}

impl Language {
    /// All languages in selection order.
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
        Language::Japanese,
        Language::Korean,
        Language::Chinese,
    ];

    /// Look up a language by selection index; unknown indices map to English.
    ///
    /// ```
    /// use vocab_player::language::Language;
    ///
    /// assert_eq!(Language::from_index(1), Language::Spanish);
    /// assert_eq!(Language::from_index(42), Language::English);
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Language::English)
    }

    /// Selection index of this language in [`Language::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|l| *l == self).unwrap_or(0)
    }

    /// Human-readable name shown in language pickers.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Chinese => "Chinese",
        }
    }

    /// ISO-639-1 code sent to the translation service.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Chinese => "zh",
        }
    }

    /// Language tag handed to the speech service.
    ///
    /// English is pinned to the US voice; the rest use the bare language.
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            other => other.code(),
        }
    }

    /// Parse a language from its display name or its code, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(s) || l.code().eq_ignore_ascii_case(s))
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Delay options
// ---------------------------------------------------------------------------

/// Selectable pauses in seconds, 1.0 to 4.0 in half-second steps.
pub const DELAY_OPTIONS: [f64; 7] = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];

/// Index into [`DELAY_OPTIONS`] selected on first run (2.0 s).
pub const DEFAULT_DELAY_INDEX: usize = 2;

/// Resolve a delay index, using `fallback_secs` when it is out of range.
pub fn delay_for_index(index: usize, fallback_secs: f64) -> Duration {
    let secs = DELAY_OPTIONS.get(index).copied().unwrap_or(fallback_secs);
    Duration::from_secs_f64(secs)
}

/// Index of the delay option equal to `secs`, if any.
pub fn delay_index_of(secs: f64) -> Option<usize> {
    DELAY_OPTIONS
        .iter()
        .position(|d| (d - secs).abs() < f64::EPSILON)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_for_every_language() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.index(), i);
            assert_eq!(Language::from_index(i), *lang);
        }
    }

    #[test]
    fn default_selection_is_english_to_spanish() {
        assert_eq!(Language::from_index(0), Language::English);
        assert_eq!(Language::from_index(1), Language::Spanish);
    }

    #[test]
    fn speech_tags() {
        assert_eq!(Language::English.speech_tag(), "en-US");
        assert_eq!(Language::Spanish.speech_tag(), "es");
        assert_eq!(Language::Chinese.speech_tag(), "zh");
    }

    #[test]
    fn parse_accepts_name_and_code() {
        assert_eq!(Language::parse("german"), Some(Language::German));
        assert_eq!(Language::parse("DE"), Some(Language::German));
        assert_eq!(Language::parse(" ja "), Some(Language::Japanese));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn default_delay_is_two_seconds() {
        assert_eq!(
            delay_for_index(DEFAULT_DELAY_INDEX, 9.0),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn out_of_range_delay_uses_fallback() {
        assert_eq!(delay_for_index(99, 2.5), Duration::from_millis(2_500));
    }

    #[test]
    fn delay_index_lookup() {
        assert_eq!(delay_index_of(3.5), Some(5));
        assert_eq!(delay_index_of(0.7), None);
    }
}
