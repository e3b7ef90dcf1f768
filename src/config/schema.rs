//! Configuration schema definitions.
//!
//! All types derive Serde traits so a `gateway.toml` can override any
//! section; every section has defaults that reproduce the stock behavior
//! (listen on :3000, accept user id 123, query api.nationalize.io).

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Score endpoint settings.
    pub score: ScoreConfig,

    /// Nationality upstream settings.
    pub nationality: NationalityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Settings for the `/echo` score endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// The single user id accepted without a rejection notice.
    pub valid_user_id: u64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self { valid_user_id: 123 }
    }
}

/// Settings for the outbound nationality-prediction service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NationalityConfig {
    /// Base URL of the prediction service.
    pub base_url: String,

    /// Deadline for a single upstream request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for NationalityConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.nationalize.io".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) applied when `RUST_LOG`
    /// is not set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
