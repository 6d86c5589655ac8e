//! Chat relay handler

use crate::error::ServerError;
use crate::server::AppState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Request body accepted from the widget
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Success reply returned to the widget
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub content: String,
}

/// Relay one chat message to the upstream provider
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ServerError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ServerError::MissingMessage);
    }

    let content = state.upstream.generate_reply(message).await?;
    Ok(Json(ChatReply { content }))
}
