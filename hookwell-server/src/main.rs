// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Hookwell — webhook receiver and inspector
//
//  Ingest:  POST /webhook (any sender, never rejected)
//  Browse:  HTML UI at / and /webhooks/{id}
//  API:     JSON under /api/webhooks, signature check on demand
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use clap::Parser;
use hookwell_core::ServiceConfig;
use hookwell_store::HistoryStore;
use hookwell_web::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hookwell", version, about = "Hookwell — webhook receiver and inspector")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/hookwell.yaml")]
    config: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Listen address (overrides the config file)
    #[arg(long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Hookwell starting");

    // ── Config ──
    let config = if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading config file");
        ServiceConfig::load(&cli.config)?
    } else {
        info!("No config file found, using defaults");
        ServiceConfig::default()
    };

    // ── History store (owned here, injected into handlers) ──
    let store = Arc::new(HistoryStore::new(config.history.capacity));
    info!(capacity = store.capacity(), "History store ready");

    let state = AppState::new(Arc::clone(&store), config.verify.clone())?;

    let addr = cli.addr.unwrap_or(config.server.addr);
    info!(
        addr = %addr,
        replay_window_secs = config.verify.max_age_secs,
        "Hookwell is ready — accepting webhooks"
    );

    hookwell_web::server::start(&addr, state).await
}
