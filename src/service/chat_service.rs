//! Chat service: orchestrates room operations and logs them.

use std::sync::Arc;

use crate::domain::{PageRequest, RoomRegistry};
use crate::error::ChatError;

/// Orchestration layer for all chat operations.
///
/// Stateless coordinator: owns a reference to the [`RoomRegistry`] that
/// holds all room state. Every method delegates to the registry and
/// records the outcome through `tracing`.
#[derive(Debug, Clone)]
pub struct ChatService {
    registry: Arc<RoomRegistry>,
}

impl ChatService {
    /// Creates a new `ChatService`.
    #[must_use]
    pub fn new(registry: Arc<RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Joins `user` to `room`, creating the room on first use.
    pub async fn join(&self, user: &str, room: &str) -> String {
        let message = self.registry.join(user, room).await;
        tracing::info!(user, room, "user joined room");
        message
    }

    /// Posts a message to a room the user belongs to.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] if the room does not exist or the user is
    /// not a member.
    pub async fn send_message(
        &self,
        user: &str,
        room: &str,
        message: &str,
    ) -> Result<(), ChatError> {
        match self.registry.send_message(user, room, message).await {
            Ok(()) => {
                tracing::debug!(user, room, len = message.len(), "message posted");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(user, room, error = %e, "message rejected");
                Err(e)
            }
        }
    }

    /// Removes `user` from `room`.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] if the room does not exist or the user is
    /// not a member.
    pub async fn leave(&self, user: &str, room: &str) -> Result<String, ChatError> {
        match self.registry.leave(user, room).await {
            Ok(message) => {
                tracing::info!(user, room, "user left room");
                Ok(message)
            }
            Err(e) => {
                tracing::warn!(user, room, error = %e, "leave rejected");
                Err(e)
            }
        }
    }

    /// Returns one page of a room's history.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::RoomNotFound`] if the room does not exist.
    pub async fn get_messages(
        &self,
        room: &str,
        page: PageRequest,
    ) -> Result<Vec<String>, ChatError> {
        let messages = self.registry.get_messages(room, page).await;
        match &messages {
            Ok(batch) => tracing::debug!(
                room,
                page = page.page(),
                size = page.size(),
                returned = batch.len(),
                "history read"
            ),
            Err(e) => tracing::warn!(room, error = %e, "history read rejected"),
        }
        messages
    }

    /// Returns the number of rooms created so far.
    pub async fn room_count(&self) -> usize {
        self.registry.len().await
    }
}
