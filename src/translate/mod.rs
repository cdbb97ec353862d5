//! Translation service boundary.
//!
//! This module provides:
//! * [`Translator`]: async trait implemented by all translation backends.
//! * [`ApiTranslator`]: LibreTranslate-compatible HTTP backend.
//! * [`DisabledTranslator`], used when translation is switched off.
//! * [`TranslationError`]: the two ways a translation can fail.
//!
//! Failures are returned as structured errors; front ends decide how to show
//! them. The `Display` text of [`TranslationError`] is suitable for putting
//! straight into the translation cell.

pub mod api;

pub use api::ApiTranslator;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::TranslationConfig;
use crate::language::Language;

// ---------------------------------------------------------------------------
// TranslationError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// The language model for the requested pair could not be obtained.
    #[error("Model download failed: {0}")]
    ModelDownloadFailed(String),

    /// The model was available but the translation itself failed.
    #[error("Translation failed: {0}")]
    TranslationFailed(String),
}

// ---------------------------------------------------------------------------
// Translator trait
// ---------------------------------------------------------------------------

/// Async text translation.
///
/// Implementors must be `Send + Sync` so they can be shared behind
/// `Arc<dyn Translator>` and called from spawned tasks.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError>;
}

/// Build the translator selected in `config`.
pub fn from_config(config: &TranslationConfig) -> Arc<dyn Translator> {
    if config.enabled {
        Arc::new(ApiTranslator::from_config(config))
    } else {
        Arc::new(DisabledTranslator)
    }
}

// ---------------------------------------------------------------------------
// DisabledTranslator
// ---------------------------------------------------------------------------

/// Always fails; lets the rest of the app run with translation switched off.
pub struct DisabledTranslator;

#[async_trait]
impl Translator for DisabledTranslator {
    async fn translate(
        &self,
        _text: &str,
        _from: Language,
        _to: Language,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::TranslationFailed(
            "translation disabled".into(),
        ))
    }
}

// ---------------------------------------------------------------------------
// MockTranslator  (test-only)
// ---------------------------------------------------------------------------

/// Answers from a fixed table, optionally after a delay.
#[cfg(test)]
#[derive(Default)]
pub struct MockTranslator {
    table: std::collections::HashMap<String, Result<String, TranslationError>>,
    delay: Option<std::time::Duration>,
}

#[cfg(test)]
impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, result: Result<&str, TranslationError>) -> Self {
        self.table
            .insert(text.to_string(), result.map(str::to_string));
        self
    }

    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[cfg(test)]
#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: Language,
        _to: Language,
    ) -> Result<String, TranslationError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.table.get(text).cloned().unwrap_or_else(|| {
            Err(TranslationError::TranslationFailed(format!(
                "unknown word {text:?}"
            )))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
