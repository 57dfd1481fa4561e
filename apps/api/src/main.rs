mod chat;
mod config;
mod db;
mod directory;
mod errors;
mod extract;
mod llm_client;
mod models;
mod quiz;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::service::ChatService;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Fails fast when DATABASE_URL is missing
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EdVise API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;

    let chat_config = config.chat_config();
    let gemini = GeminiClient::new(chat_config.timeout)?;
    if chat_config.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; chat questions will be rejected");
    }
    info!(
        "Chat assistant initialized (model: {}, timeout: {}s)",
        chat_config.model,
        chat_config.timeout.as_secs()
    );
    let chat = Arc::new(ChatService::new(chat_config, Arc::new(gemini)));

    let state = AppState {
        db,
        chat,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
