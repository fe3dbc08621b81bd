//! Chat room DTOs for join, send, leave and history operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /chat/join`.
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinRequest {
    /// User name.
    #[serde(default)]
    pub user: String,
    /// Room name. Created on first join.
    #[serde(default)]
    pub room: String,
}

/// Request body for `POST /chat/send`.
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    /// Sending user; must have joined `room`.
    #[serde(default)]
    pub user: String,
    /// Target room.
    #[serde(default)]
    pub room: String,
    /// Message text.
    #[serde(default)]
    pub message: String,
}

/// Request body for `POST /chat/leave`.
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    /// Leaving user; must have joined `room`.
    #[serde(default)]
    pub user: String,
    /// Room to leave.
    #[serde(default)]
    pub room: String,
}

/// Response body for `GET /chat/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GetMessagesResponse {
    /// Messages on the requested page, oldest first. Empty past the end.
    pub messages: Vec<String>,
}
