//! WebSocket frame helpers shared by both handlers.

use axum::extract::ws::Message;
use serde::Serialize;

/// Whether a data frame arrived as text or binary.
///
/// Replies mirror the kind of the frame they answer, so a binary request
/// gets a binary reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Text,
    Binary,
}

impl FrameKind {
    /// Wrap a JSON/text payload in a frame of this kind.
    pub fn reply(self, payload: String) -> Message {
        match self {
            FrameKind::Text => Message::Text(payload.into()),
            FrameKind::Binary => Message::Binary(payload.into_bytes().into()),
        }
    }
}

/// Structured error reported to the peer over the socket.
///
/// Once a connection is upgraded the underlying HTTP response is dead, so
/// every failure the peer should see travels as one of these frames.
#[derive(Debug, Serialize)]
pub struct ErrorFrame {
    pub error: String,
}

impl ErrorFrame {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            error: reason.into(),
        }
    }

    /// JSON body for the frame.
    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.error }).to_string()
    }
}
