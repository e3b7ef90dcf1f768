//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init tracing → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl-C → broadcast → server drains connections → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
