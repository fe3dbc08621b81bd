//! A single chat room: its current members and its message log.

use std::collections::HashSet;

use super::PageRequest;

/// One chat room held by the [`super::RoomRegistry`].
///
/// The log is append-only: entries are never removed or reordered, and
/// system messages for joins and leaves are interleaved with user
/// messages in the order the events happened.
#[derive(Debug)]
pub struct Room {
    /// Names of the users currently in the room.
    members: HashSet<String>,

    /// Every message posted to the room, oldest first.
    log: Vec<String>,
}

impl Room {
    /// Creates an empty room with no members and no messages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
            log: Vec::new(),
        }
    }

    /// Adds `user` to the room and logs the join.
    ///
    /// Joining twice leaves membership unchanged but still logs a second
    /// join message. Returns the logged message.
    pub fn join(&mut self, user: &str, room_name: &str) -> String {
        self.members.insert(user.to_string());
        self.append(format!("{user} joined room {room_name}"))
    }

    /// Appends `"<user>: <message>"` to the log.
    ///
    /// Membership is checked by the caller.
    pub fn post(&mut self, user: &str, message: &str) {
        self.append(format!("{user}: {message}"));
    }

    /// Removes `user` from the room and logs the departure.
    ///
    /// Returns `None` without touching the log if `user` was not a member.
    pub fn leave(&mut self, user: &str, room_name: &str) -> Option<String> {
        if !self.members.remove(user) {
            return None;
        }
        Some(self.append(format!("{user} left room {room_name}")))
    }

    /// Returns `true` if `user` is currently in the room.
    #[must_use]
    pub fn is_member(&self, user: &str) -> bool {
        self.members.contains(user)
    }

    /// Returns an owned copy of the messages covered by `page`.
    #[must_use]
    pub fn page(&self, page: PageRequest) -> Vec<String> {
        self.log
            .get(page.window(self.log.len()))
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    /// Returns the current members, sorted by name.
    #[cfg(test)]
    pub(crate) fn members(&self) -> Vec<String> {
        let mut members: Vec<String> = self.members.iter().cloned().collect();
        members.sort_unstable();
        members
    }

    /// Number of entries in the log.
    #[cfg(test)]
    pub(crate) fn message_count(&self) -> usize {
        self.log.len()
    }

    fn append(&mut self, entry: String) -> String {
        self.log.push(entry.clone());
        entry
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn all(room: &Room) -> Vec<String> {
        let Some(req) = PageRequest::try_new(1, usize::MAX) else {
            panic!("valid page request");
        };
        room.page(req)
    }

    #[test]
    fn join_adds_member_and_logs() {
        let mut room = Room::new();
        let msg = room.join("alice", "general");
        assert_eq!(msg, "alice joined room general");
        assert!(room.is_member("alice"));
        assert_eq!(all(&room), vec!["alice joined room general"]);
    }

    #[test]
    fn rejoin_logs_again_without_duplicating_member() {
        let mut room = Room::new();
        room.join("alice", "general");
        room.join("alice", "general");
        assert_eq!(room.members(), vec!["alice"]);
        assert_eq!(room.message_count(), 2);
    }

    #[test]
    fn post_formats_user_message() {
        let mut room = Room::new();
        room.join("bob", "general");
        room.post("bob", "hi");
        assert_eq!(all(&room), vec!["bob joined room general", "bob: hi"]);
    }

    #[test]
    fn leave_non_member_is_noop() {
        let mut room = Room::new();
        assert!(room.leave("ghost", "general").is_none());
        assert_eq!(room.message_count(), 0);
    }

    #[test]
    fn leave_removes_member_and_logs() {
        let mut room = Room::new();
        room.join("alice", "general");
        let msg = room.leave("alice", "general");
        assert_eq!(msg.as_deref(), Some("alice left room general"));
        assert!(!room.is_member("alice"));
        assert_eq!(room.message_count(), 2);
    }

    #[test]
    fn members_are_sorted() {
        let mut room = Room::new();
        room.join("carol", "r");
        room.join("alice", "r");
        room.join("bob", "r");
        assert_eq!(room.members(), vec!["alice", "bob", "carol"]);
    }
}
