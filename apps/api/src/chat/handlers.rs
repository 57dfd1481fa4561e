//! Axum route handlers for the chat assistant.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::service::ChatReply;
use crate::chat::store::{append_chat_exchange, chat_sessions};
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::mentorship::MentorshipSessionRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// When present, the exchange is added to the user's conversation log.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ChatHistoryQuery {
    pub user_id: Uuid,
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::InputMissing("message is required".to_string()))?;

    let reply = state.chat.respond(&message).await?;
    info!(query_type = ?reply.query_type(), "Chat message handled");

    if let Some(user_id) = request.user_id {
        if let Err(e) = append_chat_exchange(&state.db, user_id, &message, &reply).await {
            warn!("Failed to log chat exchange for user {user_id}: {e:#}");
        }
    }

    Ok(Json(reply))
}

/// GET /api/chat/history?user_id=
pub async fn handle_chat_history(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ChatHistoryQuery>,
) -> Result<Json<Vec<MentorshipSessionRow>>, AppError> {
    Ok(Json(chat_sessions(&state.db, params.user_id).await?))
}
