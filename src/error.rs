use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::translate::TranslateError;

pub const MISSING_VALUES: &str = "could not find values array";
pub const MISSING_RECORDS: &str = "could not find valid records in values array";
pub const MISSING_TEXT: &str = "could not find text in record data";
pub const MISSING_LANGUAGE_TYPE: &str = "language must be a string";

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("{0}")]
    MalformedRequest(String),

    #[error("recordId cannot be null")]
    MissingRecordId,

    #[error("language cannot be null")]
    MissingLanguage,

    #[error("translation failed: {0}")]
    TranslationFailure(#[from] TranslateError),
}

impl SkillError {
    pub fn malformed(message: impl Into<String>) -> Self {
        SkillError::MalformedRequest(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            SkillError::MalformedRequest(_)
            | SkillError::MissingRecordId
            | SkillError::MissingLanguage => StatusCode::BAD_REQUEST,
            SkillError::TranslationFailure(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for SkillError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
