//! Veritas Daemon - credibility analysis service
//!
//! Scores user-submitted text with a keyword heuristic and a fact-check
//! provider, and serves the combined verdict over HTTP.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use veritas_common::VeritasConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Veritas Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = VeritasConfig::from_env();
    veritasd::server::run(&config).await
}
