use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::skill::{EnrichmentHandler, LanguageMatcher, MarkerMatcher, MatchMode};
use crate::translate::{Translator, TranslatorClient};

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<EnrichmentHandler>,
}

impl AppState {
    /// Build state with the HTTP translator described by the configuration
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = Arc::new(TranslatorClient::new(&config.translator)?);
        info!(
            "Initialized translator: endpoint={}, target={}",
            config.translator.endpoint, config.translator.target_language
        );
        Ok(Self::with_translator(config, translator))
    }

    /// Build state around any translator implementation
    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        let language = &config.language;
        let matcher = MarkerMatcher::new(language.marker.clone(), language.match_mode);
        if matcher.mode() == MatchMode::Substring {
            warn!(
                "Language match mode is substring: any tag containing {:?} is treated as English",
                language.marker
            );
        }
        let matcher: Arc<dyn LanguageMatcher> = Arc::new(matcher);

        let handler = EnrichmentHandler::new(
            translator,
            matcher,
            config.translator.target_language.clone(),
            language.missing_language,
        );

        Self {
            handler: Arc::new(handler),
        }
    }
}
