use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

/// Embeds the `static/` directory at compile time.
#[derive(Embed)]
#[folder = "static/"]
#[prefix = ""]
struct StaticAssets;

/// Tiny inline icon so browsers don't log a 404 on every page load.
const FAVICON_SVG: &str = r##"<?xml version="1.0" encoding="utf-8"?><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="8" fill="#1f6feb"/><text x="50%" y="50%" font-size="36" font-family="sans-serif" text-anchor="middle" fill="#ffffff" dy=".35em">H</text></svg>"##;

/// Guess a MIME type from file extension.
fn mime_from_ext(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// `GET /favicon.ico`
pub async fn favicon() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml")],
        FAVICON_SVG,
    )
}

/// `GET /static/{*path}`: serve an embedded asset, or 404.
pub async fn static_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    match StaticAssets::get(path) {
        Some(file) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime_from_ext(path))],
            file.data.into_owned(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
