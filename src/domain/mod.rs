//! Domain layer: rooms, pagination, and the room registry.
//!
//! This module contains the server-side chat model: the per-room member
//! set and message log, the pagination window used to read history, and
//! the registry that owns every room behind a single lock.

pub mod page;
pub mod room;
pub mod room_registry;

pub use page::PageRequest;
pub use room::Room;
pub use room_registry::RoomRegistry;
