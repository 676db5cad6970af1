mod config;
mod errors;
mod llm_client;
mod opening;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, ModelId};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Firstline API v{}", env!("CARGO_PKG_VERSION"));

    // A missing API key is not fatal at startup: the API rejects the empty
    // credential per request and the handler surfaces it on the 500 path.
    if config.anthropic_api_key.is_empty() {
        warn!("ANTHROPIC_API_KEY is not set; completion calls will fail");
    }
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!(
        "LLM client initialized (default model: {})",
        ModelId::default().as_str()
    );

    let state = AppState { llm };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
