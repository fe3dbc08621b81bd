//! Service layer: orchestration between API handlers and the domain.
//!
//! Handlers call the service, which drives the [`crate::domain::RoomRegistry`]
//! and logs every state change.

pub mod chat_service;

pub use chat_service::ChatService;
