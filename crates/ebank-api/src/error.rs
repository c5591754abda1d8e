//! Error types for ebank-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ebank_core::error::ErrorCode;
use ebank_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Core(e) => match e.code() {
                ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
                ErrorCode::AccountNotFound => StatusCode::NOT_FOUND,
                ErrorCode::BackendError | ErrorCode::BackendUnavailable => StatusCode::BAD_GATEWAY,
                ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            ApiError::BadRequest { message } => serde_json::json!({
                "code": "BAD_REQUEST",
                "message": message,
                "suggestions": [],
            }),
            ApiError::Core(e) => {
                let details = e.to_details();
                serde_json::json!({
                    "code": details.code,
                    "message": details.message,
                    "suggestions": details.suggestions,
                })
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
