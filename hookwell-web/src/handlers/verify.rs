use super::ApiError;
use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use hookwell_core::HookwellError;
use hookwell_verify::VerifyError;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct VerifyRequest {
    pub secret: Option<String>,
}

/// `POST /api/webhooks/{id}/verify`: check a stored delivery's signature
/// against a caller-supplied secret.
///
/// 404 unknown id, 400 missing secret / missing headers / stale timestamp,
/// 401 signature mismatch. The secret is never logged.
pub async fn verify_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    // A missing or non-JSON body is the same as a missing secret
    let request: VerifyRequest = serde_json::from_slice(&body).unwrap_or_default();
    let secret = request
        .secret
        .filter(|s| !s.is_empty())
        .ok_or(HookwellError::MissingSecret)?;

    let entry = state
        .store
        .get(&id)
        .ok_or_else(|| HookwellError::EntryNotFound(id.clone()))?;

    let cfg = &state.verify;
    hookwell_verify::verify_entry(
        entry.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        &entry.raw_body,
        secret.as_bytes(),
        &cfg.id_header,
        &cfg.timestamp_header,
        &cfg.signature_header,
        cfg.max_age_secs,
        Utc::now().timestamp(),
    )
    .map_err(|e| match e {
        VerifyError::MissingDeliveryId => HookwellError::MissingHeader(cfg.id_header.clone()),
        VerifyError::MissingTimestamp => HookwellError::MissingHeader(cfg.timestamp_header.clone()),
        VerifyError::MissingSignature => HookwellError::MissingHeader(cfg.signature_header.clone()),
        VerifyError::StaleTimestamp => HookwellError::StaleTimestamp,
        VerifyError::SignatureMismatch => HookwellError::SignatureMismatch,
    })?;

    info!(id = %id, "Signature verified");

    Ok(Json(json!({ "verified": true })))
}
