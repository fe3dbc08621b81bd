//! Chat room handlers: join, send, history, leave.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;

use crate::api::dto::{
    GetMessagesResponse, JoinRequest, LeaveRequest, MessageResponse, MessagesQuery,
    SendMessageRequest,
};
use crate::app_state::AppState;
use crate::error::{ChatError, ErrorResponse};

/// `POST /chat/join` — Join a room, creating it if needed.
///
/// # Errors
///
/// Returns [`ChatError::InvalidRequest`] if the body is not a valid
/// [`JoinRequest`].
#[utoipa::path(
    post,
    path = "/chat/join",
    tag = "Chat",
    summary = "Join a room",
    description = "Adds the user to the room, creating the room on first use, and logs a join message.",
    request_body = JoinRequest,
    responses(
        (status = 200, description = "Joined; returns the logged join message", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
    )
)]
pub async fn join_room(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ChatError> {
    let req: JoinRequest = decode(&body)?;
    let message = state.chat_service.join(&req.user, &req.room).await;
    Ok(Json(MessageResponse::new(message)))
}

/// `POST /chat/send` — Post a message to a room.
///
/// # Errors
///
/// Returns [`ChatError::RoomNotFound`] or [`ChatError::UserNotMember`]
/// when the room or membership is missing, and
/// [`ChatError::InvalidRequest`] on a malformed body.
#[utoipa::path(
    post,
    path = "/chat/send",
    tag = "Chat",
    summary = "Send a message",
    description = "Appends `<user>: <message>` to the room's history. The user must be a member.",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message sent", body = MessageResponse),
        (status = 400, description = "Unknown room, non-member user, or malformed body", body = ErrorResponse),
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ChatError> {
    let req: SendMessageRequest = decode(&body)?;
    state
        .chat_service
        .send_message(&req.user, &req.room, &req.message)
        .await?;
    Ok(Json(MessageResponse::new("Message sent")))
}

/// `GET /chat/messages` — Read one page of a room's history.
///
/// # Errors
///
/// Returns [`ChatError::RoomNotFound`] if the room does not exist.
#[utoipa::path(
    get,
    path = "/chat/messages",
    tag = "Chat",
    summary = "List room messages",
    description = "Returns a page of the room's history, oldest first. Pages past the end are empty. Invalid or missing page/size fall back to defaults.",
    params(MessagesQuery),
    responses(
        (status = 200, description = "Page of messages", body = GetMessagesResponse),
        (status = 400, description = "Unknown room", body = ErrorResponse),
    )
)]
pub async fn get_messages(
    State(state): State<AppState>,
    query: Result<Query<MessagesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ChatError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!(error = %rejection, "error decoding query string");
        ChatError::InvalidRequest(rejection.body_text())
    })?;
    let page = query.page_request(state.default_page_size);
    let messages = state.chat_service.get_messages(&query.room, page).await?;
    Ok(Json(GetMessagesResponse { messages }))
}

/// `POST /chat/leave` — Leave a room.
///
/// # Errors
///
/// Returns [`ChatError::RoomNotFound`] or [`ChatError::UserNotMember`]
/// when the room or membership is missing, and
/// [`ChatError::InvalidRequest`] on a malformed body.
#[utoipa::path(
    post,
    path = "/chat/leave",
    tag = "Chat",
    summary = "Leave a room",
    description = "Removes the user from the room and logs a leave message. The room itself is kept.",
    request_body = LeaveRequest,
    responses(
        (status = 200, description = "Left; returns the logged leave message", body = MessageResponse),
        (status = 400, description = "Unknown room, non-member user, or malformed body", body = ErrorResponse),
    )
)]
pub async fn leave_room(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ChatError> {
    let req: LeaveRequest = decode(&body)?;
    let message = state.chat_service.leave(&req.user, &req.room).await?;
    Ok(Json(MessageResponse::new(message)))
}

/// Chat routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/join", post(join_room))
        .route("/send", post(send_message))
        .route("/messages", get(get_messages))
        .route("/leave", post(leave_room))
}

/// Decodes a JSON request body regardless of its `Content-Type`.
///
/// # Errors
///
/// Returns [`ChatError::InvalidRequest`] if the body is not valid JSON for
/// `T`.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ChatError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "error decoding request body");
        ChatError::InvalidRequest(e.to_string())
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn decode_fills_missing_fields_with_empty_strings() {
        let Ok(req) = decode::<JoinRequest>(br#"{"user":"alice"}"#) else {
            panic!("partial body should decode");
        };
        assert_eq!(req.user, "alice");
        assert_eq!(req.room, "");
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let result = decode::<SendMessageRequest>(b"{not json");
        assert!(matches!(result, Err(ChatError::InvalidRequest(_))));

        let empty = decode::<LeaveRequest>(b"");
        assert!(matches!(empty, Err(ChatError::InvalidRequest(_))));
    }
}
