//! Error responses for the HTTP surface.

use crate::model::ModelError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidInput(#[from] JsonRejection),
    #[error("scoring failed: {0}")]
    Scoring(#[from] ModelError),
    #[error("scoring task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidInput(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Scoring(e) => {
                tracing::error!(error = %e, "scoring failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Scoring model failed".to_string(),
                )
            }
            ApiError::Task(e) => {
                tracing::error!(error = %e, "scoring task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
