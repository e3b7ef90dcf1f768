//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both WebSocket endpoints
//! - Build the shared application state (scoreboard, upstream client)
//! - Wire up tracing middleware
//! - Serve with graceful shutdown
//!
//! Upgrades are accepted from any origin; callers must not rely on
//! browser same-origin protection.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::{delegator, echo};
use crate::nationality::{NationalityClient, NationalityError};
use crate::score::Scoreboard;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide running total, shared by every `/echo` connection.
    pub scoreboard: Arc<Scoreboard>,

    /// Shared upstream client for nationality lookups.
    pub nationality: NationalityClient,

    /// The single user id accepted without a rejection notice.
    pub valid_user_id: u64,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the configured upstream base URL does not parse.
    pub fn new(config: GatewayConfig) -> Result<Self, NationalityError> {
        let state = AppState {
            scoreboard: Arc::new(Scoreboard::new()),
            nationality: NationalityClient::new(&config.nationality)?,
            valid_user_id: config.score.valid_user_id,
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with both endpoints and middleware.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/echo", get(echo::handler))
            .route("/country-name-delegator", get(delegator::handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
