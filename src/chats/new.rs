use axum::{debug_handler, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::{db::{require_text, Chat}, extract::AppJson, store::SharedStore, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct NewChatRequest {
    #[serde(default)]
    name: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn create_chat(
    State(store): State<SharedStore>,
    AppJson(NewChatRequest { name }): AppJson<NewChatRequest>,
) -> AppResult<Json<Chat>> {
    require_text("name", &name)?;

    let chat = store.create_chat(&name).await?;
    info!(chat_id = chat.id, "created chat");

    Ok(Json(chat))
}
