use crate::server::AppState;
use axum::body::to_bytes;
use axum::extract::{ConnectInfo, Request, State};
use axum::response::Json;
use hookwell_core::WebhookEntry;
use indexmap::IndexMap;
use serde_json::{Value, json};
use std::net::SocketAddr;
use tracing::info;

/// Captured bodies are capped here; anything larger is stored as absent
/// rather than rejected, so ingest never fails validation.
const MAX_CAPTURE_BYTES: usize = 10 * 1024 * 1024;

/// `POST /webhook`: capture one inbound webhook from any sender.
///
/// Always returns 200: malformed JSON degrades to a text capture, invalid
/// UTF-8 is replaced, an unreadable body is captured as absent.
pub async fn receive_webhook(State(state): State<AppState>, request: Request) -> Json<Value> {
    let (parts, body) = request.into_parts();

    // Last value wins when a header name repeats
    let mut headers: IndexMap<String, String> = IndexMap::new();
    for (name, value) in parts.headers.iter() {
        headers.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    let peer_addr = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let raw = to_bytes(body, MAX_CAPTURE_BYTES).await.unwrap_or_default();

    let entry = WebhookEntry::capture(
        parts.method.to_string(),
        parts.uri.path().to_string(),
        headers,
        &raw,
        peer_addr,
    );
    let id = entry.id.clone();

    info!(
        id = %id,
        client_ip = entry.client_ip.as_deref().unwrap_or("unknown"),
        bytes = raw.len(),
        "Received webhook"
    );

    state.store.insert(entry);

    Json(json!({ "status": "ok", "id": id }))
}
