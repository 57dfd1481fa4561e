use std::sync::Arc;

use sqlx::PgPool;

use crate::chat::service::ChatService;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Built once at startup with the Gemini credential, model and timeout.
    pub chat: Arc<ChatService>,
    pub config: Config,
}
