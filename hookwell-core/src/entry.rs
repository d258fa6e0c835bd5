use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One captured webhook call.
///
/// Entries are immutable once constructed: the store hands out clones,
/// never mutable references. `raw_body` keeps the payload exactly as it
/// arrived (lossily decoded once) and is the only field signature
/// verification may read; `body` is a best-effort derived view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEntry {
    /// Unique delivery identifier (UUID v4), assigned at capture.
    pub id: String,

    /// UTC arrival time.
    pub received_at: DateTime<Utc>,

    /// HTTP method, verbatim from the inbound request.
    pub method: String,

    /// Request path, verbatim from the inbound request.
    pub path: String,

    /// Best-effort sender address: first `x-forwarded-for` element,
    /// else the peer address, else `"unknown"`. Advisory metadata only:
    /// the forwarded header is client-controlled unless a trusted proxy
    /// sets it.
    pub client_ip: Option<String>,

    pub user_agent: Option<String>,

    /// Header map in arrival order; last value wins when a name repeats.
    pub headers: IndexMap<String, String>,

    /// Parsed view of the payload.
    pub body: Body,

    /// The received payload bytes decoded as UTF-8 with replacement.
    pub raw_body: String,
}

/// Best-effort parse of the request payload.
///
/// Serialized untagged, so the JSON API emits the parsed JSON value,
/// the fallback text, or `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Json(serde_json::Value),
    Text(String),
    Absent,
}

impl Body {
    /// Derive the tagged view from raw payload bytes: JSON when the bytes
    /// parse, lossy text otherwise, absent for an empty payload.
    pub fn parse(raw: &[u8]) -> Self {
        if raw.is_empty() {
            return Body::Absent;
        }
        match serde_json::from_slice(raw) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Text(String::from_utf8_lossy(raw).into_owned()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Body::Absent)
    }

    /// Pretty-printed JSON for the detail view, when the body parsed.
    pub fn to_pretty_json(&self) -> Option<String> {
        match self {
            Body::Json(value) => serde_json::to_string_pretty(value).ok(),
            _ => None,
        }
    }
}

impl WebhookEntry {
    /// Capture one inbound call. Assigns a fresh id and timestamp. Never
    /// fails: malformed payloads degrade to text or absent bodies.
    pub fn capture(
        method: impl Into<String>,
        path: impl Into<String>,
        headers: IndexMap<String, String>,
        raw: &[u8],
        peer_addr: Option<String>,
    ) -> Self {
        let user_agent = header_value(&headers, "user-agent");
        let client_ip = derive_client_ip(&headers, peer_addr);

        WebhookEntry {
            id: Uuid::new_v4().to_string(),
            received_at: Utc::now(),
            method: method.into(),
            path: path.into(),
            client_ip: Some(client_ip),
            user_agent,
            headers,
            body: Body::parse(raw),
            raw_body: String::from_utf8_lossy(raw).into_owned(),
        }
    }
}

fn header_value(headers: &IndexMap<String, String>, name: &str) -> Option<String> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.clone())
}

/// Prefer the first `x-forwarded-for` element when behind a proxy,
/// else the direct peer address, else `"unknown"`.
pub fn derive_client_ip(headers: &IndexMap<String, String>, peer_addr: Option<String>) -> String {
    if let Some(xff) = header_value(headers, "x-forwarded-for") {
        // May carry a comma-separated chain; the first element is the client.
        if let Some(first) = xff.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    peer_addr.unwrap_or_else(|| "unknown".to_string())
}
