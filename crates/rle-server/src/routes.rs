use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rle_codec::CodecResult;
use rle_core::Mode;
use rle_parser::process_document;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn codec_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/encode", post(encode_text))
        .route("/api/v1/decode", post(decode_text))
}

pub fn file_routes() -> Router<AppState> {
    Router::new().route("/api/v1/files/{mode}", post(process_file))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "marker": state.codec.marker().to_string(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub output: String,
    pub original_len: usize,
    pub output_len: usize,
    pub tokens: usize,
    pub ratio: f64,
}

impl From<CodecResult> for TextResponse {
    fn from(r: CodecResult) -> Self {
        Self {
            ratio: r.ratio(),
            original_len: r.original_len,
            output_len: r.output_len,
            tokens: r.tokens,
            output: r.output,
        }
    }
}

async fn encode_text(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Json<TextResponse> {
    Json(state.codec.encode(&req.text).into())
}

async fn decode_text(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    Ok(Json(state.codec.decode(&req.text)?.into()))
}

#[derive(Debug, Deserialize)]
pub struct FileParams {
    pub filename: String,
}

/// Process an uploaded document; the response body is the produced file.
async fn process_file(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Query(params): Query<FileParams>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mode: Mode = mode.parse().map_err(ApiError::bad_request)?;
    let codec = state.codec;
    let doc = tokio::task::spawn_blocking(move || {
        process_document(&codec, mode, &params.filename, &body)
    })
    .await
    .map_err(|e| ApiError::internal(e.to_string()))??;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(doc.kind.content_type()));
    headers.insert(header::CONTENT_DISPOSITION, content_disposition(&doc.file_name));
    headers.insert("x-original-size-kb", kb_header(doc.report.original_kb()));
    headers.insert("x-result-size-kb", kb_header(doc.report.result_kb()));
    Ok((StatusCode::OK, headers, doc.bytes).into_response())
}

fn content_disposition(file_name: &str) -> HeaderValue {
    let safe: String = file_name
        .chars()
        .map(|c| if (c.is_ascii_graphic() && c != '"') || c == ' ' { c } else { '_' })
        .collect();
    HeaderValue::from_str(&format!("attachment; filename=\"{safe}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

fn kb_header(kb: f64) -> HeaderValue {
    HeaderValue::from_str(&format!("{kb:.2}")).unwrap_or_else(|_| HeaderValue::from_static("0.00"))
}
