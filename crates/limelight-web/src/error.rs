use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Terminal request failures. Everything here maps to a generic 500 so no
/// query or template detail leaks to the client.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),
    #[error("template error: {0}")]
    Render(#[from] askama::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
