//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    common::time::millis_to_rfc3339,
    infrastructure::dto::http::{ParticipantDto, PresenceDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Read-only view of the current presence snapshot.
///
/// Observability endpoint; does not push a `stats` event to sessions.
pub async fn get_presence(State(state): State<Arc<AppState>>) -> Json<PresenceDto> {
    let participants = state.registry.snapshot().await;

    let presence = PresenceDto {
        count: participants.len(),
        people: participants
            .iter()
            .map(|p| ParticipantDto {
                identity: p.identity.as_str().to_string(),
                joined_at: millis_to_rfc3339(p.joined_at.value()),
            })
            .collect(),
    };

    Json(presence)
}
