//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, trace layer)
//!     → echo.rs | delegator.rs (WebSocket upgrade, per-connection loop)
//!     → frames.rs (reply framing, structured error frames)
//! ```

pub mod delegator;
pub mod echo;
pub mod frames;
pub mod server;

pub use server::{AppState, HttpServer};
