//! # chat-api
//!
//! In-memory multi-room chat served over a JSON REST API.
//!
//! Users join named rooms, post messages, page through each room's
//! history and leave. All state lives in memory in a single
//! [`domain::RoomRegistry`]; clients poll for new messages.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ChatService (service/)
//!     │
//!     └── RoomRegistry (domain/)
//!           └── Room: members + append-only log
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
