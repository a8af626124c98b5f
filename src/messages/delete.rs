use axum::{debug_handler, extract::State};
use tracing::{debug, info};

use crate::{extract::AppPath, store::SharedStore, AppResult};

/// Removing an unknown id succeeds without touching anything.
#[debug_handler(state = crate::AppState)]
pub(crate) async fn delete_message(
    State(store): State<SharedStore>,
    AppPath(id): AppPath<i64>,
) -> AppResult<()> {
    match store.delete_message(id).await? {
        0 => debug!(message_id = id, "no message to delete"),
        _ => info!(message_id = id, "deleted message"),
    }

    Ok(())
}
