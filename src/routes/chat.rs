use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};

use crate::{
    error::AppError,
    message::{
        ChatRequest, ChatResponse, DebugRequest, DebugResponse, HistoryRole, LocationInput,
        ProbeResponse, iso_timestamp,
    },
    state::SharedState,
};

// GET /test: round-trip a fixed prompt through the generator.
pub async fn test_handler(State(state): State<SharedState>) -> Json<ProbeResponse> {
    Json(state.relay.probe().await)
}

// POST /debug: echo without touching the generator.
pub async fn debug_handler(payload: Result<Json<DebugRequest>, JsonRejection>) -> Json<DebugResponse> {
    // Blank check only; the prompt gets the message as sent.
    let message = payload
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    let session_id = match payload.session_id.as_deref().map(str::trim) {
        Some(sid) if !sid.is_empty() => Some(state.sessions.ensure_session(sid).await),
        _ if payload.new_session => Some(state.sessions.create_session().await),
        _ => None,
    };

    // Client-supplied turns take precedence over the session store.
    let client_history = payload.conversation_history.unwrap_or_default();
    let history = match &session_id {
        Some(sid) if client_history.is_empty() => state.sessions.get_history(sid).await.unwrap_or_default(),
        _ => client_history,
    };

    // A location missing either coordinate is ignored.
    let location = payload.location.and_then(LocationInput::complete);

    info!(
        message_len = message.len(),
        has_location = location.is_some(),
        history_len = history.len(),
        session = session_id.as_deref().unwrap_or("-"),
        "chat request"
    );

    let mut response = state.relay.respond(message, location.as_ref(), &history).await;

    if let Some(sid) = session_id {
        state.sessions.append_message(&sid, HistoryRole::User, message).await;
        state
            .sessions
            .append_message(&sid, HistoryRole::Assistant, response.response.clone())
            .await;
        response.session_id = Some(sid);
    }

    Ok(Json(response))
}
