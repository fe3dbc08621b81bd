//! Concurrent room storage behind a single registry-wide lock.
//!
//! [`RoomRegistry`] stores every room in one `HashMap` guarded by a single
//! [`tokio::sync::Mutex`]. Room creation, membership changes, log appends
//! and history reads all happen under that guard, so each operation sees
//! and leaves the whole table in a consistent state.

use std::collections::HashMap;

use tokio::sync::Mutex;

use super::{PageRequest, Room};
use crate::error::ChatError;

/// Central store for all chat rooms.
///
/// # Concurrency
///
/// - Every operation acquires the one registry lock for its whole duration.
/// - Operations on unrelated rooms are serialized as well.
/// - No I/O happens while the lock is held and the lock is never acquired
///   twice in one call, so operations cannot deadlock.
///
/// Rooms are created lazily by [`RoomRegistry::join`] and never removed.
/// Callers only receive owned copies of room data.
#[derive(Debug)]
pub struct RoomRegistry {
    rooms: Mutex<HashMap<String, Room>>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    /// Adds `user` to `room`, creating the room if it does not exist yet.
    ///
    /// Always succeeds and returns the logged `"<user> joined room <room>"`
    /// message. Joining a room twice appends a second join message.
    pub async fn join(&self, user: &str, room: &str) -> String {
        let mut rooms = self.rooms.lock().await;
        rooms.entry(room.to_string()).or_default().join(user, room)
    }

    /// Posts `message` from `user` to `room`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::RoomNotFound`] if the room was never created,
    /// or [`ChatError::UserNotMember`] if `user` is not currently in it.
    /// The log is left unchanged on error.
    pub async fn send_message(
        &self,
        user: &str,
        room: &str,
        message: &str,
    ) -> Result<(), ChatError> {
        let mut rooms = self.rooms.lock().await;
        let chat_room = rooms
            .get_mut(room)
            .ok_or_else(|| ChatError::RoomNotFound(room.to_string()))?;
        if !chat_room.is_member(user) {
            return Err(not_member(user, room));
        }
        chat_room.post(user, message);
        Ok(())
    }

    /// Removes `user` from `room` and returns the logged
    /// `"<user> left room <room>"` message.
    ///
    /// The room is kept even when its last member leaves.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::RoomNotFound`] if the room was never created,
    /// or [`ChatError::UserNotMember`] if `user` is not currently in it.
    pub async fn leave(&self, user: &str, room: &str) -> Result<String, ChatError> {
        let mut rooms = self.rooms.lock().await;
        let chat_room = rooms
            .get_mut(room)
            .ok_or_else(|| ChatError::RoomNotFound(room.to_string()))?;
        chat_room
            .leave(user, room)
            .ok_or_else(|| not_member(user, room))
    }

    /// Returns one page of `room`'s history, oldest first.
    ///
    /// A page past the end of the log is empty, not an error. Reading does
    /// not require membership.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::RoomNotFound`] if the room was never created.
    pub async fn get_messages(
        &self,
        room: &str,
        page: PageRequest,
    ) -> Result<Vec<String>, ChatError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room)
            .map(|chat_room| chat_room.page(page))
            .ok_or_else(|| ChatError::RoomNotFound(room.to_string()))
    }

    /// Returns the current members of `room`, sorted by name.
    #[cfg(test)]
    pub(crate) async fn members(&self, room: &str) -> Result<Vec<String>, ChatError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room)
            .map(Room::members)
            .ok_or_else(|| ChatError::RoomNotFound(room.to_string()))
    }

    /// Returns the number of entries in `room`'s log.
    #[cfg(test)]
    pub(crate) async fn message_count(&self, room: &str) -> Result<usize, ChatError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room)
            .map(Room::message_count)
            .ok_or_else(|| ChatError::RoomNotFound(room.to_string()))
    }

    /// Returns `true` if `room` has been created.
    #[cfg(test)]
    pub(crate) async fn contains(&self, room: &str) -> bool {
        self.rooms.lock().await.contains_key(room)
    }

    /// Returns the number of rooms in the registry.
    pub async fn len(&self) -> usize {
        self.rooms.lock().await.len()
    }

    /// Returns `true` if no room has been created yet.
    pub async fn is_empty(&self) -> bool {
        self.rooms.lock().await.is_empty()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn not_member(user: &str, room: &str) -> ChatError {
    ChatError::UserNotMember {
        user: user.to_string(),
        room: room.to_string(),
    }
}
