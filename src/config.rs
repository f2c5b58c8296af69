use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::skill::language::{MatchMode, MissingLanguagePolicy};
use crate::translate::DEFAULT_TARGET_LANGUAGE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub language: LanguageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7071
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Connection settings for the translation API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub subscription_key: String,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default = "default_target_language")]
    pub target_language: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.microsofttranslator.com/v2/Http.svc".to_string()
}

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            subscription_key: String::new(),
            region: None,
            target_language: default_target_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// How a record's language tag is judged to already be English
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub missing_language: MissingLanguagePolicy,
}

fn default_marker() -> String {
    "en".to_string()
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            match_mode: MatchMode::default(),
            missing_language: MissingLanguagePolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file, substituting `${VAR}`
    /// references from the environment
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        let content = substitute_env_vars(content.trim_start_matches('\u{feff}'));

        let path_lower = path.to_lowercase();
        let config: Config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        Ok(config)
    }

    /// Load the first candidate path that holds a valid configuration.
    ///
    /// A file that exists but fails to load is logged at warn level, and its
    /// error is reported if no later candidate loads.
    pub fn discover(paths: &[String]) -> Result<(Self, String)> {
        let mut last_error = None;

        for path in paths {
            match Config::load(path) {
                Ok(config) => return Ok((config, path.clone())),
                Err(e) if Path::new(path).exists() => {
                    warn!("Failed to load config from {}: {:#}", path, e);
                    last_error = Some(e.context(format!("Invalid configuration file: {}", path)));
                }
                Err(e) => debug!("Failed to load config from {}: {}", path, e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| anyhow::anyhow!("Could not find config file. Tried: {:?}", paths)))
    }

    /// Apply `TRANSLATOR_SUBSCRIPTION_KEY`, `TRANSLATOR_ENDPOINT` and `PORT`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(key) = std::env::var("TRANSLATOR_SUBSCRIPTION_KEY") {
            self.translator.subscription_key = key;
        }
        if let Ok(endpoint) = std::env::var("TRANSLATOR_ENDPOINT") {
            self.translator.endpoint = endpoint;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", port))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let key = self.translator.subscription_key.trim();
        if key.is_empty() {
            anyhow::bail!("translator.subscription_key is empty; set TRANSLATOR_SUBSCRIPTION_KEY");
        }
        if key.contains("${") {
            anyhow::bail!("translator.subscription_key references an unset environment variable: {}", key);
        }
        if self.translator.endpoint.trim().is_empty() {
            anyhow::bail!("translator.endpoint is empty");
        }
        if self.translator.target_language.trim().is_empty() {
            anyhow::bail!("translator.target_language is empty");
        }
        if self.translator.timeout_secs == 0 {
            anyhow::bail!("translator.timeout_secs must be greater than zero");
        }
        if self.language.marker.is_empty() {
            anyhow::bail!("language.marker is empty");
        }
        Ok(())
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{(\w+)\}").expect("valid env var pattern"))
}

/// Replace `${VAR_NAME}` with the variable's value, leaving unset ones in place
pub fn substitute_env_vars(content: &str) -> String {
    env_var_pattern()
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
