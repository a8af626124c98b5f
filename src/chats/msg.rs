use axum::{debug_handler, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::{db::{require_id, require_text, Message, MessageView}, extract::{AppJson, AppPath}, store::SharedStore, AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewMessageRequest {
    #[serde(default)]
    user_id: i64,
    #[serde(default)]
    content: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn new_message(
    State(store): State<SharedStore>,
    AppPath(chat_id): AppPath<i64>,
    AppJson(NewMessageRequest { user_id, content }): AppJson<NewMessageRequest>,
) -> AppResult<Json<Message>> {
    require_id("userId", user_id)?;
    require_text("content", &content)?;

    let message = store.create_message(chat_id, user_id, &content).await?;
    info!(message_id = message.id, chat_id, user_id, "posted message");

    Ok(Json(message))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn chat_messages(
    State(store): State<SharedStore>,
    AppPath(chat_id): AppPath<i64>,
) -> AppResult<Json<Vec<MessageView>>> {
    if !store.chat_exists(chat_id).await? {
        return Err(AppError::NotFound(format!("chat {chat_id} not found")));
    }

    Ok(Json(store.chat_messages(chat_id).await?))
}
