//! API Router and Application State

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::relay::discord::DiscordClient;
use crate::relay::handlers;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Outbound Discord webhook client
    pub discord: DiscordClient,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, discord: DiscordClient) -> Self {
        Self {
            config: Arc::new(config),
            discord,
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/hacknplan", post(handlers::hacknplan))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
