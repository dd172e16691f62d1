use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;
use crate::errors::{AppError, AppJson};
use crate::models::profile::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub user_message: ChatMessage,
    pub reply: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct GreetingQuery {
    pub name: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(req): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let text = req.message.trim();
    if text.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let user_message = ChatMessage::user(text);
    let reply = state.chat.reply(text, req.profile.as_ref()).await;

    Ok(Json(ChatResponse {
        user_message,
        reply,
    }))
}

/// GET /api/v1/chat/greeting?name=
pub async fn handle_greeting(
    State(state): State<AppState>,
    Query(query): Query<GreetingQuery>,
) -> Json<ChatMessage> {
    Json(state.chat.greeting(query.name.trim()))
}
