pub mod handler;
pub mod language;
pub mod types;
pub mod validation;

pub use handler::EnrichmentHandler;
pub use language::{LanguageMatcher, MarkerMatcher, MatchMode, MissingLanguagePolicy};
pub use types::{EnrichmentResponse, InputRecord, OutputRecord};
