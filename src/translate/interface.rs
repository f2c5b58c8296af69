use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Locale every non-English record is translated into
pub const DEFAULT_TARGET_LANGUAGE: &str = "en-us";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translator request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("translator returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not read translator response: {0}")]
    Envelope(String),
}

/// Translation collaborator used by the enrichment handler
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `request.text` into `request.target_lang`
    ///
    /// # Returns
    /// The translated plain text, already unwrapped from any response markup
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, TranslateError>;
}
