use anyhow::Result;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;
use walkaudits::{
    config::Config,
    logging,
    server::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) config + logging ─────────────────────────────────────────
    let config = Config::from_env()?;
    logging::init(&config.log_level);
    info!(sheet = %config.sheet_url, "Starting walk audits service");

    // ─── 2) shared state ─────────────────────────────────────────────
    let state = Arc::new(AppState::new(Client::new(), &config)?);
    let routes = server::routes(state);

    // ─── 3) serve ────────────────────────────────────────────────────
    info!("Server starting on port {}", config.port);
    info!("Health check: http://localhost:{}/health", config.port);
    info!("Records: GET http://localhost:{}/walk-audits", config.port);

    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;

    Ok(())
}
