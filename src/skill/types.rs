use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the batch sent by the indexing pipeline. Only the first
/// record of a batch is processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "recordId", default)]
    pub record_id: Option<RecordId>,
    #[serde(default)]
    pub data: InputData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputData {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Inputs the skill does not use
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Record identifiers are strings on the wire, but numeric ids are accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(serde_json::Number),
}

impl RecordId {
    pub fn into_string(self) -> String {
        match self {
            RecordId::Text(s) => s,
            RecordId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentResponse {
    pub values: Vec<OutputRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "recordId")]
    pub record_id: String,
    pub data: OutputData,
    pub errors: Option<Vec<String>>,
    pub warnings: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputData {
    pub text: String,
}

impl OutputRecord {
    pub fn new(record_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            data: OutputData { text: text.into() },
            errors: None,
            warnings: None,
        }
    }
}

impl EnrichmentResponse {
    pub fn single(record: OutputRecord) -> Self {
        Self { values: vec![record] }
    }
}
