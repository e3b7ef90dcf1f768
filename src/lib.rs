//! WebSocket Score & Nationality Gateway Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod nationality;
pub mod observability;
pub mod score;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
