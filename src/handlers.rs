use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::SkillError;
use crate::skill::EnrichmentResponse;
use crate::state::AppState;

/// `POST /api/Translate`
///
/// The body is taken as raw bytes so that malformed JSON is reported with the
/// skill's own messages rather than the extractor's rejection.
pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EnrichmentResponse>, SkillError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("translate", %request_id);

    async move {
        match state.handler.process(&body).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => {
                warn!("Request failed: {}", e);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
