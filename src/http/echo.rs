//! The `/echo` score endpoint.
//!
//! Per-connection loop: decode a `ScoreEnvelope`, vet the user id, apply
//! the delta to the shared scoreboard, echo the new total back in the same
//! frame kind the request used. A malformed payload gets an error frame
//! and leaves the total untouched; the loop keeps running either way.

use std::net::SocketAddr;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        ConnectInfo, State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use uuid::Uuid;

use crate::http::frames::{ErrorFrame, FrameKind};
use crate::http::server::AppState;
use crate::score::ScoreEnvelope;

/// Reply sent when the user id check fails. The delta is still applied
/// afterwards; rejection is a notice, not a veto.
const USER_INVALID_REPLY: &str = "User invalid!";

pub async fn handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| run(socket, state, peer))
}

async fn run(mut socket: WebSocket, state: AppState, peer: SocketAddr) {
    let connection_id = Uuid::new_v4();
    tracing::debug!(connection_id = %connection_id, peer = %peer, "Score connection opened");

    while let Some(message) = socket.recv().await {
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(connection_id = %connection_id, error = %e, "Read failed");
                break;
            }
        };

        let outcome = match message {
            Message::Text(text) => {
                handle_envelope(
                    &mut socket,
                    &state,
                    connection_id,
                    text.as_bytes(),
                    FrameKind::Text,
                )
                .await
            }
            Message::Binary(payload) => {
                handle_envelope(&mut socket, &state, connection_id, &payload, FrameKind::Binary)
                    .await
            }
            Message::Close(frame) => {
                match frame {
                    Some(frame) => tracing::info!(
                        connection_id = %connection_id,
                        code = frame.code,
                        reason = %frame.reason,
                        "Client disconnected"
                    ),
                    None => tracing::info!(connection_id = %connection_id, "Client disconnected"),
                }
                break;
            }
            // Pings are answered by the runtime.
            Message::Ping(_) | Message::Pong(_) => Ok(()),
        };

        if let Err(e) = outcome {
            tracing::debug!(connection_id = %connection_id, error = %e, "Write failed");
            break;
        }
    }

    tracing::debug!(connection_id = %connection_id, "Score connection closed");
}

async fn handle_envelope(
    socket: &mut WebSocket,
    state: &AppState,
    connection_id: Uuid,
    payload: &[u8],
    kind: FrameKind,
) -> Result<(), axum::Error> {
    let envelope: ScoreEnvelope = match serde_json::from_slice(payload) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!(connection_id = %connection_id, error = %e, "Malformed score envelope");
            return socket
                .send(kind.reply(ErrorFrame::new("malformed score envelope").to_json()))
                .await;
        }
    };

    if envelope.user_id != state.valid_user_id {
        tracing::warn!(
            connection_id = %connection_id,
            user_id = envelope.user_id,
            "Rejected user id"
        );
        socket
            .send(kind.reply(USER_INVALID_REPLY.to_string()))
            .await?;
        // Falls through: unknown users still move the total.
    }

    let total = state.scoreboard.add(envelope.point);
    tracing::debug!(
        connection_id = %connection_id,
        user_id = envelope.user_id,
        point = envelope.point,
        total,
        "Score updated"
    );

    socket.send(kind.reply(total.to_string())).await
}
