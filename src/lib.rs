use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;

pub mod ai;
pub mod api;
pub mod config;
pub mod contracts;
pub mod handlers;
pub mod keys;

pub use api::{router, AppState};
pub use config::Config;
pub use keys::KeyRing;

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting shopsense relay...");

    let config = Config::from_env();
    let keys = Arc::new(KeyRing::from_env());
    tracing::info!(keys_active = keys.len(), "Key rotation ready");

    let state = AppState::new(keys, config.gemini_base.clone(), config.model.clone());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
