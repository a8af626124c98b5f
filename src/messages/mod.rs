mod delete;
mod view;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(view::message).delete(delete::delete_message))
}
