//! `ApiTranslator` talks to a LibreTranslate-compatible HTTP endpoint.
//!
//! Two steps per request, mirroring an on-device translator that must fetch
//! a language model before it can translate:
//!
//! 1. `GET {base_url}/languages` checks that the language pair is served.
//!    The list is fetched once and cached; failure here is
//!    [`TranslationError::ModelDownloadFailed`].
//! 2. `POST {base_url}/translate` does the translation itself; failure here is
//!    [`TranslationError::TranslationFailed`].
//!
//! All connection details come from [`TranslationConfig`].

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::config::TranslationConfig;
use crate::language::Language;

use super::{TranslationError, Translator};

/// One entry of the `/languages` response.
#[derive(Debug, Clone, Deserialize)]
struct ServedLanguage {
    code: String,
    /// Codes this language can be translated into. Older servers omit it,
    /// meaning "any served language".
    #[serde(default)]
    targets: Vec<String>,
}

/// Whether `served` can translate `from` into `to`.
fn pair_supported(served: &[ServedLanguage], from: Language, to: Language) -> bool {
    let source = served.iter().find(|l| l.code == from.code());
    let target_served = served.iter().any(|l| l.code == to.code());
    match source {
        Some(source) if source.targets.is_empty() => target_served,
        Some(source) => source.targets.iter().any(|t| t == to.code()),
        None => false,
    }
}

pub struct ApiTranslator {
    client: reqwest::Client,
    config: TranslationConfig,
    served: OnceCell<Vec<ServedLanguage>>,
}

impl ApiTranslator {
    /// Build an `ApiTranslator` from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`; a default client is used if the builder fails.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
            served: OnceCell::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Make sure the server has a model for `from` → `to`.
    async fn ensure_model(&self, from: Language, to: Language) -> Result<(), TranslationError> {
        let served = self
            .served
            .get_or_try_init(|| async {
                log::debug!("translate: fetching served languages");
                let response = self
                    .client
                    .get(self.url("languages"))
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| TranslationError::ModelDownloadFailed(e.to_string()))?;
                response
                    .json::<Vec<ServedLanguage>>()
                    .await
                    .map_err(|e| TranslationError::ModelDownloadFailed(e.to_string()))
            })
            .await?;

        if pair_supported(served, from, to) {
            Ok(())
        } else {
            Err(TranslationError::ModelDownloadFailed(format!(
                "no model for {} → {}",
                from.code(),
                to.code()
            )))
        }
    }
}

#[async_trait]
impl Translator for ApiTranslator {
    /// The `api_key` field is sent only when configured and non-empty.
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::TranslationFailed(
                "nothing to translate".into(),
            ));
        }

        self.ensure_model(from, to).await?;

        let mut body = serde_json::json!({
            "q":      text,
            "source": from.code(),
            "target": to.code(),
            "format": "text",
        });
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            body["api_key"] = serde_json::Value::from(key);
        }

        let response = self
            .client
            .post(self.url("translate"))
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::TranslationFailed(e.to_string()))?;

        let status = response.status();
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslationError::TranslationFailed(e.to_string()))?;

        if !status.is_success() {
            let reason = json["error"].as_str().unwrap_or("no details");
            return Err(TranslationError::TranslationFailed(format!(
                "HTTP {status}: {reason}"
            )));
        }

        let translated = json["translatedText"]
            .as_str()
            .map(str::trim)
            .unwrap_or_default();

        if translated.is_empty() {
            return Err(TranslationError::TranslationFailed(
                "empty response".into(),
            ));
        }

        Ok(translated.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
