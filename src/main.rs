//! WebSocket Score & Nationality Gateway
//!
//! A small gateway built with Tokio and Axum exposing two WebSocket
//! endpoints:
//!
//! ```text
//!                        ┌──────────────────────────────────────────┐
//!                        │                 GATEWAY                   │
//!                        │                                           │
//!   ws /echo ────────────┼─▶ echo handler ──▶ shared scoreboard      │
//!                        │        │                 │                │
//!                        │        ◀── running total ┘                │
//!                        │                                           │
//!   ws /country-name-    │                                           │
//!      delegator ────────┼─▶ delegator ──▶ nationality client ───────┼──▶ api.nationalize.io
//!                        │        ◀────── predictions (JSON) ────────┼───
//!                        │                                           │
//!                        │  config · tracing · graceful shutdown     │
//!                        └──────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;

use score_gateway::config::{self, GatewayConfig};
use score_gateway::http::HttpServer;
use score_gateway::lifecycle::Shutdown;
use score_gateway::observability::logging;

/// Optional configuration file; defaults apply when absent.
const CONFIG_FILE: &str = "gateway.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = Path::new(CONFIG_FILE);
    let config = if config_path.exists() {
        config::load_config(config_path)?
    } else {
        GatewayConfig::default()
    };

    logging::init(&config.observability);

    tracing::info!("score-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        valid_user_id = config.score.valid_user_id,
        upstream = %config.nationality.base_url,
        upstream_timeout_secs = config.nationality.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal.trigger();
        }
    });

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
