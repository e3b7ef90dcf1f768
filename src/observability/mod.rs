//! Observability subsystem.
//!
//! Structured logging via `tracing`; every connection event carries a
//! connection id field so one socket's lifetime can be followed through
//! interleaved output.

pub mod logging;
