//! HTTP server for veritasd.

use crate::analysis::TextAnalysisService;
use crate::{providers, routes};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use veritas_common::VeritasConfig;

/// Server-side request deadline; generous next to the client's 10s
/// per-attempt budget so slow provider calls fail on the client first.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state shared across handlers. Read-only after startup.
pub struct AppState {
    pub analysis: TextAnalysisService,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(analysis: TextAnalysisService) -> Self {
        Self {
            analysis,
            start_time: Instant::now(),
        }
    }

    /// Wire up the configured provider and dedup setting.
    pub fn from_config(config: &VeritasConfig) -> Self {
        let provider = providers::from_config(config);
        info!("Fact-check provider: {}", provider.name());
        Self::new(TextAnalysisService::new(provider).with_dedup_sources(config.dedup_sources))
    }
}

/// Build the router; separated from `run` so tests can drive it directly.
pub fn app(state: Arc<AppState>) -> Router {
    // Permissive CORS: the extension runs from its own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::analysis_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
}

/// Run the HTTP server until the process is stopped.
pub async fn run(config: &VeritasConfig) -> Result<()> {
    let state = Arc::new(AppState::from_config(config));
    let app = app(state);

    // Bind to localhost only
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
