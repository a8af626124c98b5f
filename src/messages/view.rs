use axum::{debug_handler, extract::State, Json};

use crate::{db::MessageView, extract::AppPath, store::SharedStore, AppError, AppResult};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn message(
    State(store): State<SharedStore>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<MessageView>> {
    let Some(view) = store.message(id).await? else {
        return Err(AppError::NotFound(format!("message {id} not found")));
    };

    Ok(Json(view))
}
