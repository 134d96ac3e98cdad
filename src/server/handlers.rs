use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::app::{ErrorKind, KwError};
use crate::domain::KeywordRow;
use crate::server::ServerState;

/// Body of `POST /api/fetch-keywords`.
#[derive(Debug, Default, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct FetchResponse {
    pub keywords: Vec<KeywordRow>,
}

/// Scrape the keyword table of the submitted URL.
///
/// The body is read as raw bytes so that a missing or malformed body is
/// reported the same way as a missing `url` field.
pub async fn fetch_keywords(State(state): State<Arc<ServerState>>, body: Bytes) -> Response {
    let request: FetchRequest = serde_json::from_slice(&body).unwrap_or_default();

    let url = match request.url {
        Some(url) if !url.trim().is_empty() => url,
        _ => return KwError::MissingUrl.into_response(),
    };

    match state.scraper.fetch_keywords(&url).await {
        Ok(keywords) => (StatusCode::OK, Json(FetchResponse { keywords })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Any method other than POST on the scrape endpoint.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
        .into_response()
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

impl KwError {
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for KwError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self.kind() {
            ErrorKind::Unexpected => {
                error!("Error: {}", self);
                json!({
                    "error": "An error occurred while fetching keywords",
                    "details": self.to_string(),
                })
            }
            ErrorKind::NotFound | ErrorKind::Validation => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
