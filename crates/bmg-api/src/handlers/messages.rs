//! Message handlers
//!
//! Store-and-fetch correspondence endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bmg_service::{MessageResponse, MessageService, SendMessageRequest};
use serde::Deserialize;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_path_id;

/// Send message
///
/// POST /messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.send_message(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Conversation partner filter
#[derive(Debug, Deserialize)]
pub struct ConversationQuery {
    pub with: Option<String>,
}

/// Fetch the conversation with another user
///
/// GET /messages?with=...
pub async fn get_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ConversationQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let with = query
        .with
        .ok_or_else(|| ApiError::invalid_query("Missing 'with' parameter"))?;
    let with = parse_path_id(&with, "with")?;

    let service = MessageService::new(state.service_context());
    let response = service.get_conversation(auth.user_id, with).await?;
    Ok(Json(response))
}

/// Mark a received message read
///
/// POST /messages/{message_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<String>,
) -> ApiResult<NoContent> {
    let message_id = parse_path_id(&message_id, "message_id")?;

    let service = MessageService::new(state.service_context());
    service.mark_read(message_id, auth.user_id).await?;
    Ok(NoContent)
}
