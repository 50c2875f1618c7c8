//! `POST /webhook` admission endpoint (spec.md §6.1). HTTP-specific
//! concerns only: header auth and status-code mapping. The actual ADMIT
//! filters live in `navlun::webhook::admit`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use log::info;
use serde_json::json;

use navlun::pipeline::archive_and_enqueue;
use navlun::webhook::{admit, WebhookPayload};

use crate::error::AppError;
use crate::state::AppState;

pub async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let provided = headers.get("x-api-key").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided != state.webhook_secret {
        return Err(AppError::AuthFail);
    }

    let raw_payload_json = std::str::from_utf8(&body)
        .map_err(|e| AppError::ValidationFail(format!("body is not valid utf-8: {e}")))?;
    let payload: WebhookPayload = serde_json::from_str(raw_payload_json)
        .map_err(|e| AppError::ValidationFail(format!("malformed webhook payload: {e}")))?;

    let admitted = match admit(&payload) {
        Ok(admitted) => admitted,
        Err(reason) => {
            info!("webhook message filtered: {reason}");
            return Ok(Json(json!({ "message": "Message filtered" })));
        }
    };

    let received_at = Utc::now();
    archive_and_enqueue(
        admitted,
        raw_payload_json,
        &payload.instance,
        &state.archive_bucket,
        received_at,
        state.archive.as_ref(),
        state.queue.as_ref(),
    )
    .await?;

    Ok(Json(json!({ "message": "Message stored and queued" })))
}

pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
