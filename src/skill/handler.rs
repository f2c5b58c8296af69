use std::sync::Arc;
use tracing::{debug, info, warn};

use super::language::{LanguageMatcher, MissingLanguagePolicy};
use super::types::{EnrichmentResponse, OutputRecord};
use super::validation::validate_request;
use crate::error::SkillError;
use crate::translate::{TranslateRequest, Translator};

/// Translates the first record of an enrichment batch into the target
/// language unless its language tag already marks it as English.
pub struct EnrichmentHandler {
    translator: Arc<dyn Translator>,
    matcher: Arc<dyn LanguageMatcher>,
    target_language: String,
    missing_language: MissingLanguagePolicy,
}

impl EnrichmentHandler {
    pub fn new(
        translator: Arc<dyn Translator>,
        matcher: Arc<dyn LanguageMatcher>,
        target_language: impl Into<String>,
        missing_language: MissingLanguagePolicy,
    ) -> Self {
        Self {
            translator,
            matcher,
            target_language: target_language.into(),
            missing_language,
        }
    }

    /// Process one raw request body into a single-record response
    pub async fn process(&self, body: &[u8]) -> Result<EnrichmentResponse, SkillError> {
        let record = validate_request(body)?;

        if record.ignored > 0 {
            warn!(
                "Ignoring {} extra record(s) after {}; the skill expects a batch size of 1",
                record.ignored, record.record_id
            );
        }

        let needs_translation = match record.language.as_deref() {
            Some(language) => !self.matcher.is_english(language),
            None => match self.missing_language {
                MissingLanguagePolicy::Translate => {
                    debug!("Record {} has no language, translating", record.record_id);
                    true
                }
                MissingLanguagePolicy::Reject => return Err(SkillError::MissingLanguage),
            },
        };

        let text = if needs_translation {
            let request = TranslateRequest::new(record.text, self.target_language.as_str());
            let response = self.translator.translate(&request).await?;
            info!(
                "Translated record {} from {:?} to {}",
                record.record_id, record.language, self.target_language
            );
            response.translated_text
        } else {
            debug!("Record {} is already English, passing through", record.record_id);
            record.text
        };

        Ok(EnrichmentResponse::single(OutputRecord::new(record.record_id, text)))
    }
}
