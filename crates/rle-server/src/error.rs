//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rle_codec::CodecError;
use rle_core::RleError;
use rle_parser::ProcessError;
use serde_json::json;

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, msg: impl Into<String>) -> Self {
        Self { status, code, message: msg.into() }
    }
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", msg)
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, message = %self.message, "Request failed");
        } else {
            tracing::warn!(code = self.code, message = %self.message, "Request rejected");
        }
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<CodecError> for ApiError {
    fn from(err: CodecError) -> Self {
        match &err {
            CodecError::MalformedToken { .. } | CodecError::CountOverflow { .. } => {
                ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid_encoding", err.to_string())
            }
            CodecError::OutputLimitExceeded { .. } | CodecError::OutputTooLarge { .. } => {
                ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "output_too_large", err.to_string())
            }
            CodecError::InvalidMarker(_) => ApiError::internal(err.to_string()),
        }
    }
}

impl From<RleError> for ApiError {
    fn from(err: RleError) -> Self {
        match &err {
            RleError::UnsupportedFormat(_) => {
                ApiError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_format", err.to_string())
            }
            RleError::Extraction { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, "unreadable_document", err.to_string())
            }
            RleError::EncodingMismatch { .. } => {
                ApiError::new(StatusCode::BAD_REQUEST, "encoding_mismatch", err.to_string())
            }
            _ => ApiError::internal(err.to_string()),
        }
    }
}

impl From<ProcessError> for ApiError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::Document(e) => e.into(),
            ProcessError::Codec(e) => e.into(),
        }
    }
}
