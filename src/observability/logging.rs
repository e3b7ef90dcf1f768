//! Structured logging.
//!
//! One `tracing-subscriber` registry for the whole process. `RUST_LOG`
//! wins when set; otherwise the configured level applies to this crate and
//! the HTTP trace layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;

/// Initialize the tracing subscriber. Call once, before any log event.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!(
        "score_gateway={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
