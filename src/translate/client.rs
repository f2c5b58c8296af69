use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use super::envelope::unwrap_markup;
use super::interface::{TranslateError, TranslateRequest, TranslateResponse, Translator};
use crate::config::TranslatorConfig;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// Translator backed by the hosted text translation HTTP API
#[derive(Debug, Clone)]
pub struct TranslatorClient {
    client: Client,
    endpoint: String,
    subscription_key: String,
    region: Option<String>,
}

impl TranslatorClient {
    /// Create a client from the translator section of the configuration
    pub fn new(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            subscription_key: config.subscription_key.clone(),
            region: config.region.clone(),
        })
    }
}

#[async_trait]
impl Translator for TranslatorClient {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, TranslateError> {
        let url = format!("{}/Translate", self.endpoint);

        let mut builder = self
            .client
            .get(&url)
            .query(&[("text", request.text.as_str()), ("to", request.target_lang.as_str())])
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key);

        if let Some(region) = &self.region {
            builder = builder.header(SUBSCRIPTION_REGION_HEADER, region);
        }

        debug!("Sending translate request: chars={}, to={}", request.text.chars().count(), request.target_lang);

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Translator returned {}: {}", status, body);
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let translated_text = unwrap_markup(&body)?;
        Ok(TranslateResponse { translated_text })
    }
}
