mod members;
mod msg;
mod new;

use axum::{routing::{get, post, put}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(new::create_chat))
        .route("/users/add", put(members::add_users))
        .route("/{chat_id}/users", get(members::chat_users))
        .route("/{chat_id}/messages", get(msg::chat_messages))
        .route("/{chat_id}/messages/add", post(msg::new_message))
}
