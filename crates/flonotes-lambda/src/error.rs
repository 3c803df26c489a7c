use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use flonotes_bedrock::error::BedrockError;
use flonotes_core::error::CoreError;
use flonotes_core::store::StoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotImplemented(String),
    BadGateway(String),
    GatewayTimeout(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotImplemented(msg) => (StatusCode::NOT_IMPLEMENTED, msg),
            ApiError::BadGateway(msg) => {
                tracing::warn!("upstream error: {msg}");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation(v) => ApiError::BadRequest(v.to_string()),
        }
    }
}

impl From<BedrockError> for ApiError {
    fn from(e: BedrockError) -> Self {
        match e {
            BedrockError::EmptyPrompt => ApiError::BadRequest(e.to_string()),
            other => ApiError::BadGateway(other.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unimplemented => ApiError::NotImplemented(e.to_string()),
        }
    }
}
