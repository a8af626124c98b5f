use axum::{extract::rejection::{JsonRejection, PathRejection}, http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

/// Everything a handler can fail with. Rendered as a plain text body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty field, malformed body, bad path parameter.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by the store, constraint violations included.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Storage(err) => {
                error!(error = %err, "storage failure");
                "internal server error".to_owned()
            }
        };

        (self.status(), body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
