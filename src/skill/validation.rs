use serde_json::Value;

use super::types::InputRecord;
use crate::error::{SkillError, MISSING_LANGUAGE_TYPE, MISSING_RECORDS, MISSING_TEXT, MISSING_VALUES};

/// The single record a request is reduced to once it passes validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub record_id: String,
    pub text: String,
    pub language: Option<String>,
    /// Records after the first, which are not processed
    pub ignored: usize,
}

/// Validate a raw request body. Checks run in a fixed order and the first
/// failure is returned; nothing here touches the network.
pub fn validate_request(body: &[u8]) -> Result<ValidatedRecord, SkillError> {
    let request: Value =
        serde_json::from_slice(body).map_err(|_| SkillError::malformed(MISSING_VALUES))?;

    let values = request
        .as_object()
        .and_then(|object| object.get("values"))
        .and_then(Value::as_array)
        .ok_or_else(|| SkillError::malformed(MISSING_VALUES))?;

    let first = values
        .first()
        .ok_or_else(|| SkillError::malformed(MISSING_RECORDS))?;

    let data = first
        .get("data")
        .and_then(Value::as_object)
        .filter(|data| !data.is_empty())
        .ok_or_else(|| SkillError::malformed(MISSING_RECORDS))?;

    if !matches!(first.get("recordId"), Some(Value::String(_)) | Some(Value::Number(_))) {
        return Err(SkillError::MissingRecordId);
    }

    if !matches!(data.get("text"), Some(Value::String(_))) {
        return Err(SkillError::malformed(MISSING_TEXT));
    }

    if !matches!(data.get("language"), None | Some(Value::Null) | Some(Value::String(_))) {
        return Err(SkillError::malformed(MISSING_LANGUAGE_TYPE));
    }

    let record: InputRecord = serde_json::from_value(first.clone())
        .map_err(|e| SkillError::malformed(format!("{}: {}", MISSING_RECORDS, e)))?;

    let record_id = record
        .record_id
        .map(|id| id.into_string())
        .ok_or(SkillError::MissingRecordId)?;
    let text = record.data.text.ok_or_else(|| SkillError::malformed(MISSING_TEXT))?;

    Ok(ValidatedRecord {
        record_id,
        text,
        language: record.data.language,
        ignored: values.len() - 1,
    })
}
