use thiserror::Error;

/// Unified error type for Hookwell.
///
/// Every variant is a per-request condition; nothing here is fatal to the
/// process. The secret supplied to verification never appears in messages.
#[derive(Error, Debug)]
pub enum HookwellError {
    #[error("Webhook not found: {0}")]
    EntryNotFound(String),

    #[error("Missing secret")]
    MissingSecret,

    #[error("Missing header: {0}")]
    MissingHeader(String),

    #[error("Stale or malformed timestamp")]
    StaleTimestamp,

    #[error("Signature mismatch")]
    SignatureMismatch,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Internal: {0}")]
    Internal(String),
}

impl HookwellError {
    /// Map to HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HookwellError::EntryNotFound(_) => 404,
            HookwellError::MissingSecret => 400,
            HookwellError::MissingHeader(_) => 400,
            HookwellError::StaleTimestamp => 400,
            HookwellError::SignatureMismatch => 401,
            _ => 500,
        }
    }

    /// JSON error body.
    pub fn to_json_body(&self) -> String {
        serde_json::json!({ "error": self.to_string() }).to_string()
    }
}
