//! REST endpoint handlers organized by resource.

pub mod chat;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all chat routes under `/chat`.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/chat", chat::routes())
}
