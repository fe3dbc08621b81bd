//! Chat error types with HTTP status code mapping.
//!
//! [`ChatError`] is the central error type for the service. The room
//! registry only ever produces [`ChatError::RoomNotFound`] and
//! [`ChatError::UserNotMember`]; [`ChatError::InvalidRequest`] belongs to
//! the HTTP boundary. Each variant maps to a numeric code, an HTTP status and
//! a structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "room general does not exist"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`ChatError::error_code`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Service error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request           |
/// | 2000–2999 | Room state      | 400 Bad Request           |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// No room with the given name has ever been joined.
    #[error("room {0} does not exist")]
    RoomNotFound(String),

    /// The user is not currently a member of the room.
    #[error("user {user} is not part of room {room}")]
    UserNotMember {
        /// User name from the request.
        user: String,
        /// Room name from the request.
        room: String,
    },

    /// Request could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ChatError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::RoomNotFound(_) => 2001,
            Self::UserNotMember { .. } => 2002,
        }
    }

    /// Returns the HTTP status code for this variant.
    ///
    /// Room state failures are reported as client errors, the same way
    /// malformed requests are.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::RoomNotFound(_) | Self::UserNotMember { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(
            ChatError::RoomNotFound("general".to_string()).to_string(),
            "room general does not exist"
        );
        assert_eq!(
            ChatError::UserNotMember {
                user: "bob".to_string(),
                room: "general".to_string(),
            }
            .to_string(),
            "user bob is not part of room general"
        );
    }

    #[test]
    fn room_errors_are_client_errors() {
        let not_found = ChatError::RoomNotFound("x".to_string());
        let not_member = ChatError::UserNotMember {
            user: "u".to_string(),
            room: "x".to_string(),
        };
        assert_eq!(not_found.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(not_member.status_code(), StatusCode::BAD_REQUEST);
        assert_ne!(not_found.error_code(), not_member.error_code());
    }

    #[test]
    fn into_response_is_json_with_status() {
        let response = ChatError::InvalidRequest("bad body".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }
}
