use std::sync::Arc;

use anyhow::Context;
use dpai_backend::{config::Config, routes, services::session_manager::SessionManager, state::AppState};
use tower_http::cors::CorsLayer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    if config.gemini_api_key.is_none() {
        info!("GEMINI_API_KEY not set, every chat will use offline replies");
    }

    let state = Arc::new(AppState::from_config(&config).context("failed to build HTTP client")?);
    spawn_session_sweeper(state.sessions.clone());

    let app = routes::create_router()
        .route("/", axum::routing::get(|| async { "DPAI backend is running" }))
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, model = %config.gemini_model, "DPAI backend listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn spawn_session_sweeper(sessions: SessionManager) {
    let period = (sessions.ttl() / 2).max(std::time::Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = sessions.purge_expired().await;
            if removed > 0 {
                debug!(removed, "purged idle sessions");
            }
        }
    });
}
