//! `HacknPlan` Bridge - Main Entry Point
//!
//! Single-endpoint relay from HacknPlan webhooks to a Discord channel.

use anyhow::Result;
use tracing::info;

use hnp_bridge::{api, config, relay::discord::DiscordClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hnp_bridge=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        locale = config.locale.as_str(),
        "Starting HacknPlan bridge"
    );

    // Build application state
    let discord = DiscordClient::new(config.discord_webhook_url.clone())?;
    let state = api::AppState::new(config, discord);

    // Build router
    let app = api::create_router(state.clone());

    // Start server
    let listener = tokio::net::TcpListener::bind(&state.config.bind_address).await?;
    info!(address = %state.config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
