pub mod appresult;
pub mod chats;
pub mod config;
pub mod db;
pub mod extract;
pub mod messages;
pub mod store;
pub mod users;

use std::sync::Arc;

use axum::{extract::{FromRef, Request}, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;

pub use appresult::{AppError, AppResult};
use store::{SharedStore, Store};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: impl Store) -> Self {
        Self { store: Arc::new(store) }
    }
}

/// Every route, with request ids and per-request tracing spans.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/users", users::router())
        .nest("/chats", chats::router())
        .nest("/messages", messages::router())

        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");

            info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id,
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
