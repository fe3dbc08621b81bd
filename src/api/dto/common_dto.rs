//! Shared DTO types used across multiple endpoints.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::PageRequest;

/// Generic acknowledgement body: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome, or the system message logged to the room.
    pub message: String,
}

impl MessageResponse {
    /// Wraps a message string.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Query parameters for `GET /chat/messages`.
///
/// `page` and `size` are taken as raw strings so that missing, empty,
/// unparsable, zero and negative values can all fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessagesQuery {
    /// Room to read. Missing is treated as the empty room name.
    #[serde(default)]
    pub room: String,
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default)]
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    /// Messages per page. Defaults to the configured page size.
    #[serde(default)]
    #[param(value_type = Option<u32>)]
    pub size: Option<String>,
}

impl MessagesQuery {
    /// Resolves `page` and `size` into a [`PageRequest`], substituting
    /// 1 and `default_size` for anything that is not a positive integer.
    #[must_use]
    pub fn page_request(&self, default_size: NonZeroUsize) -> PageRequest {
        PageRequest::new(
            parse_or_default(self.page.as_deref(), NonZeroUsize::MIN),
            parse_or_default(self.size.as_deref(), default_size),
        )
    }
}

fn parse_or_default(value: Option<&str>, default: NonZeroUsize) -> NonZeroUsize {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, size: Option<&str>) -> MessagesQuery {
        MessagesQuery {
            room: "general".to_string(),
            page: page.map(str::to_string),
            size: size.map(str::to_string),
        }
    }

    fn ten() -> NonZeroUsize {
        NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN)
    }

    #[test]
    fn missing_values_use_defaults() {
        let req = query(None, None).page_request(ten());
        assert_eq!((req.page(), req.size()), (1, 10));
    }

    #[test]
    fn explicit_values_are_kept() {
        let req = query(Some("3"), Some("25")).page_request(ten());
        assert_eq!((req.page(), req.size()), (3, 25));
    }

    #[test]
    fn invalid_values_fall_back() {
        for bad in ["", "abc", "0", "-2", "1.5", " 3", "3 "] {
            let req = query(Some(bad), Some(bad)).page_request(ten());
            assert_eq!((req.page(), req.size()), (1, 10), "input {bad:?}");
        }
    }
}
