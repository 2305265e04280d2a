use axum::{
    Json,
    extract::{Query, State},
};

use parlor_types::api::{HistoryQuery, PostMessageRequest};
use parlor_types::models::Message;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::Payload;

/// `GET /history` returns everything; `GET /history?since=N` returns only
/// messages newer than the caller's cursor. Polling clients use the latter
/// after their first sync.
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<Message>> {
    let ledger = state.store.ledger();
    let messages = match query.cursor() {
        Some(last_seen_id) => ledger.list_since(last_seen_id),
        None => ledger.list_all(),
    };
    Json(messages)
}

/// The request type has no avatar field: whatever the client claims is
/// dropped during deserialization and the ledger resolves it from the
/// registry.
pub async fn post_message(
    State(state): State<AppState>,
    Payload(req): Payload<PostMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    let message = state.store.ledger().append(
        req.message.as_deref().unwrap_or_default(),
        req.nickname.as_deref().unwrap_or_default(),
    )?;

    Ok(Json(message))
}
