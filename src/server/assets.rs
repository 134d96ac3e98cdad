//! Embedded web form.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Embedded static assets.
#[derive(RustEmbed)]
#[folder = "src/server/static/"]
struct StaticAssets;

/// Serve the index HTML page.
pub async fn serve_index() -> Response {
    match StaticAssets::get("index.html") {
        Some(content) => {
            Html(String::from_utf8_lossy(content.data.as_ref()).to_string()).into_response()
        }
        None => missing("index.html"),
    }
}

/// Serve the JavaScript app.
pub async fn serve_js() -> Response {
    serve_asset("app.js", "application/javascript")
}

/// Serve the CSS stylesheet.
pub async fn serve_css() -> Response {
    serve_asset("style.css", "text/css")
}

fn serve_asset(name: &str, content_type: &'static str) -> Response {
    match StaticAssets::get(name) {
        Some(content) => (
            [(header::CONTENT_TYPE, content_type)],
            String::from_utf8_lossy(content.data.as_ref()).to_string(),
        )
            .into_response(),
        None => missing(name),
    }
}

fn missing(name: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("{} not embedded", name)).into_response()
}
