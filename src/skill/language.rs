use serde::{Deserialize, Serialize};

/// Decides whether a record's language tag already denotes English
pub trait LanguageMatcher: Send + Sync {
    fn is_english(&self, tag: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Tag contains the marker anywhere, case-sensitive. Also matches
    /// unrelated tags such as "zh-ren".
    #[default]
    Substring,
    /// Primary subtag equals the marker, ignoring case
    Prefix,
    /// Whole tag equals the marker, ignoring case
    Exact,
}

/// What to do with a record whose `language` is absent or null
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLanguagePolicy {
    #[default]
    Translate,
    Reject,
}

#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    marker: String,
    mode: MatchMode,
}

impl MarkerMatcher {
    pub fn new(marker: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            marker: marker.into(),
            mode,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }
}

impl Default for MarkerMatcher {
    fn default() -> Self {
        Self::new("en", MatchMode::Substring)
    }
}

impl LanguageMatcher for MarkerMatcher {
    fn is_english(&self, tag: &str) -> bool {
        match self.mode {
            MatchMode::Substring => tag.contains(self.marker.as_str()),
            MatchMode::Prefix => tag
                .split(['-', '_'])
                .next()
                .map(|primary| primary.trim().eq_ignore_ascii_case(&self.marker))
                .unwrap_or(false),
            MatchMode::Exact => tag.trim().eq_ignore_ascii_case(&self.marker),
        }
    }
}
