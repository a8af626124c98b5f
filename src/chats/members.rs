use axum::{debug_handler, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::{db::{require_id, Membership}, extract::{AppJson, AppPath}, store::SharedStore, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct AddUsersRequest {
    #[serde(rename = "chatId", alias = "chatID")]
    chat_id: i64,
    #[serde(rename = "userIds", alias = "userIDs")]
    user_ids: Vec<i64>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn add_users(
    State(store): State<SharedStore>,
    AppJson(AddUsersRequest { chat_id, user_ids }): AppJson<AddUsersRequest>,
) -> AppResult<()> {
    require_id("chatId", chat_id)?;
    for &user_id in &user_ids {
        require_id("userIds", user_id)?;
    }

    store.add_members(chat_id, &user_ids).await?;
    info!(chat_id, count = user_ids.len(), "added users to chat");

    Ok(())
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn chat_users(
    State(store): State<SharedStore>,
    AppPath(chat_id): AppPath<i64>,
) -> AppResult<Json<Vec<Membership>>> {
    if !store.chat_exists(chat_id).await? {
        return Err(AppError::NotFound(format!("chat {chat_id} not found")));
    }

    Ok(Json(store.chat_members(chat_id).await?))
}
