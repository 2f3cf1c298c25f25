use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("grid size {size} is out of range (expected {min}..={max})")]
    InvalidGridSize { size: usize, min: usize, max: usize },

    #[error("too many words: {count} (limit is {max})")]
    TooManyWords { count: usize, max: usize },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for PuzzleError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejecting puzzle request: {}", self);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
