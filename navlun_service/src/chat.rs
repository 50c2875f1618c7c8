//! `POST /chat` conversational endpoint (spec.md §4.7, C7). Thin HTTP shell
//! over `agent::handle_turn`; all decision logic lives in `agent`.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::agent;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::ValidationFail("text must not be empty".to_string()));
    }
    let reply = agent::handle_turn(&state, &request.user_id, &request.text).await;
    Ok(Json(ChatResponse { reply }))
}
