// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::provider::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("no file uploaded")]
    MissingFile,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Relayed verbatim from the forwarded-to service: its status code,
    /// its raw body text.
    #[error("upstream returned {status}")]
    Upstream { status: u16, detail: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::MissingFile => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "no file uploaded" })),
            )
                .into_response(),
            AppError::Provider(err) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
            AppError::Upstream { status, detail } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, Json(json!({ "detail": detail }))).into_response()
            }
            AppError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            )
                .into_response(),
        }
    }
}
