use axum::{debug_handler, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::{db::{require_text, User}, extract::AppJson, store::SharedStore, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterUserRequest {
    #[serde(default)]
    username: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn register_user(
    State(store): State<SharedStore>,
    AppJson(RegisterUserRequest { username }): AppJson<RegisterUserRequest>,
) -> AppResult<Json<User>> {
    require_text("username", &username)?;

    let user = store.create_user(&username).await?;
    info!(user_id = user.id, "registered user");

    Ok(Json(user))
}
