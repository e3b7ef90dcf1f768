//! The `/country-name-delegator` relay endpoint.
//!
//! Per-connection loop: decode a `NameRequest`, ask the nationality
//! upstream, relay its predictions to the peer as a JSON text frame.
//! Upstream failures (transport, timeout, bad status, undecodable body)
//! come back as error frames and the loop keeps running.

use std::net::SocketAddr;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        ConnectInfo, State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use uuid::Uuid;

use crate::http::frames::ErrorFrame;
use crate::http::server::AppState;
use crate::nationality::NameRequest;

pub async fn handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| run(socket, state, peer))
}

async fn run(mut socket: WebSocket, state: AppState, peer: SocketAddr) {
    let connection_id = Uuid::new_v4();
    tracing::debug!(connection_id = %connection_id, peer = %peer, "Delegator connection opened");

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
                handle_request(&mut socket, &state, connection_id, text.as_bytes()).await
            }
            Message::Binary(payload) => {
                handle_request(&mut socket, &state, connection_id, &payload).await
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
            Message::Ping(_) | Message::Pong(_) => Ok(()),
        };

        if let Err(e) = outcome {
            tracing::debug!(connection_id = %connection_id, error = %e, "Write failed");
            break;
        }
    }

    tracing::debug!(connection_id = %connection_id, "Delegator connection closed");
}

async fn handle_request(
    socket: &mut WebSocket,
    state: &AppState,
    connection_id: Uuid,
    payload: &[u8],
) -> Result<(), axum::Error> {
    let request: NameRequest = match serde_json::from_slice(payload) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(connection_id = %connection_id, error = %e, "Malformed name request");
            return send_error(socket, "malformed name request").await;
        }
    };

    match state.nationality.lookup(&request.name).await {
        Ok(result) => {
            tracing::debug!(
                connection_id = %connection_id,
                name = %result.name,
                predictions = result.country.len(),
                "Relaying upstream predictions"
            );
            match serde_json::to_string(&result) {
                Ok(body) => socket.send(Message::Text(body.into())).await,
                Err(e) => {
                    tracing::error!(connection_id = %connection_id, error = %e, "Serialization failed");
                    send_error(socket, "internal serialization failure").await
                }
            }
        }
        Err(e) => {
            tracing::warn!(connection_id = %connection_id, name = %request.name, error = %e, "Upstream lookup failed");
            send_error(socket, e.to_string()).await
        }
    }
}

async fn send_error(socket: &mut WebSocket, reason: impl Into<String>) -> Result<(), axum::Error> {
    socket
        .send(Message::Text(ErrorFrame::new(reason).to_json().into()))
        .await
}
