//! Verification of signed webhook deliveries.
//!
//! The supported scheme signs `{delivery_id}.{timestamp}.{payload}` with
//! HMAC-SHA256 and transmits it as `v1,<base64 digest>` alongside the
//! delivery id and a Unix-seconds timestamp. The signed string uses the
//! payload exactly as received; a re-serialized body would break
//! verification whenever key order, whitespace, or Unicode escaping
//! differs from what the sender signed.
//!
//! All functions are pure; the current time is an argument so the
//! freshness window is testable at its boundaries.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Version prefix carried by the signature header.
pub const SIGNATURE_PREFIX: &str = "v1,";

/// Why a delivery failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("missing delivery id header")]
    MissingDeliveryId,

    #[error("missing timestamp header")]
    MissingTimestamp,

    #[error("missing signature header")]
    MissingSignature,

    /// Covers unparseable, future, and expired timestamps alike; any of
    /// them is a potential replay.
    #[error("stale or malformed timestamp")]
    StaleTimestamp,

    #[error("signature mismatch")]
    SignatureMismatch,
}

/// Compute the signature for a delivery: `v1,<base64 HMAC-SHA256>` over
/// `{delivery_id}.{timestamp}.{payload}` keyed with the raw secret bytes.
pub fn sign(delivery_id: &str, timestamp: &str, payload: &str, secret: &[u8]) -> String {
    let signed_content = format!("{delivery_id}.{timestamp}.{payload}");
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(signed_content.as_bytes());
    let digest = mac.finalize().into_bytes();
    format!("{SIGNATURE_PREFIX}{}", BASE64_STANDARD.encode(digest))
}

/// Check that `timestamp_text` is a Unix timestamp no older than
/// `max_age_secs` and not in the future. Returns false, never an error,
/// on parse failure.
pub fn is_timestamp_fresh(timestamp_text: &str, now_secs: i64, max_age_secs: i64) -> bool {
    let Ok(timestamp) = timestamp_text.trim().parse::<i64>() else {
        return false;
    };
    let age = now_secs - timestamp;
    (0..=max_age_secs).contains(&age)
}

/// Verify a claimed signature against the exact received payload.
///
/// The comparison of the base64 digests is constant-time, so a mismatch
/// leaks nothing about how many digest bytes matched.
pub fn verify_signature(
    delivery_id: &str,
    timestamp: &str,
    payload: &str,
    secret: &[u8],
    signature_header: &str,
) -> bool {
    let Some(claimed) = signature_header.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    let expected = sign(delivery_id, timestamp, payload, secret);
    let expected = &expected[SIGNATURE_PREFIX.len()..];
    expected.as_bytes().ct_eq(claimed.as_bytes()).into()
}

/// Verify a stored delivery in one call: pull the id, timestamp, and
/// signature out of its headers (case-insensitive), enforce the freshness
/// window, then check the signature over the raw payload.
pub fn verify_entry<'a, I>(
    headers: I,
    raw_payload: &str,
    secret: &[u8],
    id_header: &str,
    timestamp_header: &str,
    signature_header: &str,
    max_age_secs: i64,
    now_secs: i64,
) -> Result<(), VerifyError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut delivery_id = None;
    let mut timestamp = None;
    let mut signature = None;

    for (name, value) in headers {
        if name.eq_ignore_ascii_case(id_header) {
            delivery_id = Some(value);
        } else if name.eq_ignore_ascii_case(timestamp_header) {
            timestamp = Some(value);
        } else if name.eq_ignore_ascii_case(signature_header) {
            signature = Some(value);
        }
    }

    let delivery_id = delivery_id.ok_or(VerifyError::MissingDeliveryId)?;
    let timestamp = timestamp.ok_or(VerifyError::MissingTimestamp)?;
    let signature = signature.ok_or(VerifyError::MissingSignature)?;

    if !is_timestamp_fresh(timestamp, now_secs, max_age_secs) {
        return Err(VerifyError::StaleTimestamp);
    }

    if !verify_signature(delivery_id, timestamp, raw_payload, secret, signature) {
        return Err(VerifyError::SignatureMismatch);
    }

    Ok(())
}
