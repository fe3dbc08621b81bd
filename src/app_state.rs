//! Shared application state injected into all Axum handlers.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::domain::RoomRegistry;
use crate::service::ChatService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Chat service for all room operations.
    pub chat_service: Arc<ChatService>,
    /// Page size applied when a history request omits `size`.
    pub default_page_size: NonZeroUsize,
}

impl AppState {
    /// Builds state around an existing registry.
    #[must_use]
    pub fn new(registry: Arc<RoomRegistry>, default_page_size: NonZeroUsize) -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(registry)),
            default_page_size,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(RoomRegistry::new()), DEFAULT_PAGE_SIZE)
    }
}
