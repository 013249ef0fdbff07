//! WebSocket connection handler.
//!
//! Bridges one WebSocket connection to the session layer: creates the
//! session on upgrade, dispatches `join`/`message` events to the use cases,
//! and guarantees the session is closed (and its identity released) on any
//! exit path, whether the client left cleanly or the transport dropped.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    common::time::now_millis,
    domain::{SessionId, SessionIdFactory, Timestamp},
    infrastructure::dto::ws::{
        ChatMessagePayload, ClientEvent, JoinAckMessage, MessageAckMessage,
    },
    ui::state::AppState,
    usecase::{
        CloseSessionUseCase, JoinSessionUseCase, PublishPresenceUseCase, RouteMessageUseCase,
    },
};

pub async fn chat_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = SessionIdFactory::generate();

    // All outbound traffic for this session (acks and broadcasts) goes
    // through one channel so the socket has a single writer.
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    state
        .registry
        .connect(session_id.clone(), tx.clone(), Timestamp::new(now_millis()))
        .await;
    tracing::info!("Session '{}' connected", session_id);

    let (mut sender, mut receiver) = socket.split();

    let recv_session_id = session_id.clone();
    let recv_state = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error on '{}': {}", recv_session_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_event(&recv_state, &recv_session_id, &tx, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", recv_session_id);
                    break;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping from '{}'", recv_session_id);
                }
                _ => {}
            }
        }
    });

    let mut send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Disconnect path: release the identity and, if membership changed,
    // publish the updated presence to the remaining sessions.
    let close_usecase = CloseSessionUseCase::new(state.registry.clone());
    if close_usecase.execute(&session_id).await.is_some() {
        PublishPresenceUseCase::new(state.registry.clone())
            .execute()
            .await;
    }
    tracing::info!("Session '{}' disconnected", session_id);
}

/// Dispatch one parsed client frame. Unparseable frames are logged and
/// dropped without tearing the session down.
async fn handle_client_event(
    state: &Arc<AppState>,
    session_id: &SessionId,
    tx: &mpsc::UnboundedSender<String>,
    text: &str,
) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Ignoring malformed frame from '{}': {}", session_id, e);
            return;
        }
    };

    match event {
        ClientEvent::Join { identity } => {
            let join_usecase = JoinSessionUseCase::new(state.registry.clone());
            let ack = match join_usecase.execute(session_id, identity).await {
                Ok(identity) => JoinAckMessage::accepted(identity.display_name().to_string()),
                Err(e) => {
                    tracing::warn!("Join rejected for '{}': {}", session_id, e);
                    JoinAckMessage::rejected(e.code())
                }
            };
            let joined = ack.joined;
            send_event(tx, &ack, session_id);

            if joined {
                PublishPresenceUseCase::new(state.registry.clone())
                    .execute()
                    .await;
            }
        }
        ClientEvent::Message { content } => {
            let route_usecase = RouteMessageUseCase::new(state.registry.clone());
            let ack = match route_usecase.execute(session_id, content).await {
                Ok(message) => MessageAckMessage::accepted(ChatMessagePayload::from(&message)),
                Err(e) => {
                    tracing::warn!("Send rejected for '{}': {}", session_id, e);
                    MessageAckMessage::rejected(e.code())
                }
            };
            send_event(tx, &ack, session_id);
        }
    }
}

fn send_event<T: serde::Serialize>(
    tx: &mpsc::UnboundedSender<String>,
    event: &T,
    session_id: &SessionId,
) {
    let payload = serde_json::to_string(event).unwrap();
    if tx.send(payload).is_err() {
        tracing::warn!("Failed to queue event for '{}': writer gone", session_id);
    }
}
