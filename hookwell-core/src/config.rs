use figment::{Figment, providers::{Env, Format, Yaml}};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

/// In-memory history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum retained entries; the oldest is evicted past this.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// Signed-delivery verification settings.
///
/// Header names follow the Standard Webhooks convention; senders that
/// rename them can override here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Maximum accepted signature age in seconds (replay window).
    #[serde(default = "default_max_age")]
    pub max_age_secs: i64,
    #[serde(default = "default_id_header")]
    pub id_header: String,
    #[serde(default = "default_timestamp_header")]
    pub timestamp_header: String,
    #[serde(default = "default_signature_header")]
    pub signature_header: String,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_addr() -> String { "0.0.0.0:8080".into() }
fn default_capacity() -> usize { 1000 }
fn default_max_age() -> i64 { 300 }
fn default_id_header() -> String { "webhook-id".into() }
fn default_timestamp_header() -> String { "webhook-timestamp".into() }
fn default_signature_header() -> String { "webhook-signature".into() }

// ── Impls ─────────────────────────────────────────────────────

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            history: HistoryConfig::default(),
            verify: VerifyConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: default_addr() }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: default_capacity() }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_age_secs: default_max_age(),
            id_header: default_id_header(),
            timestamp_header: default_timestamp_header(),
            signature_header: default_signature_header(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from YAML file + env overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: ServiceConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("HOOKWELL_").split("_"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_server_config_has_expected_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.addr, "0.0.0.0:8080");
    }

    #[test]
    fn default_history_capacity_is_1000() {
        let cfg = HistoryConfig::default();
        assert_eq!(cfg.capacity, 1000);
    }

    #[test]
    fn default_verify_config_uses_standard_webhooks_headers() {
        let cfg = VerifyConfig::default();
        assert_eq!(cfg.max_age_secs, 300);
        assert_eq!(cfg.id_header, "webhook-id");
        assert_eq!(cfg.timestamp_header, "webhook-timestamp");
        assert_eq!(cfg.signature_header, "webhook-signature");
    }

    #[test]
    fn service_config_default_builds_without_panic() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.server.addr, "0.0.0.0:8080");
        assert_eq!(cfg.history.capacity, 1000);
        assert_eq!(cfg.verify.max_age_secs, 300);
    }

    #[test]
    fn load_from_valid_yaml_overrides_defaults() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "server:\n  addr: \"127.0.0.1:9000\"\nhistory:\n  capacity: 50\n").unwrap();
        let cfg = ServiceConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.server.addr, "127.0.0.1:9000");
        assert_eq!(cfg.history.capacity, 50);
        // Defaults still apply for unspecified fields
        assert_eq!(cfg.verify.max_age_secs, 300);
    }

    #[test]
    fn load_yaml_with_verify_overrides() {
        let yaml = r#"
verify:
  max_age_secs: 60
  signature_header: "x-hub-signature"
"#;
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "{yaml}").unwrap();
        let cfg = ServiceConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.verify.max_age_secs, 60);
        assert_eq!(cfg.verify.signature_header, "x-hub-signature");
        assert_eq!(cfg.verify.id_header, "webhook-id");
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let cfg = ServiceConfig::load(std::path::Path::new("/nonexistent/hookwell.yaml"));
        // Figment merges an empty provider for a missing file
        let cfg = cfg.unwrap();
        assert_eq!(cfg.history.capacity, 1000);
    }
}
