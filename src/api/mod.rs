//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Chat endpoints are mounted under `/chat`; the health check lives at the
//! root.

pub mod dto;
pub mod handlers;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::chat::join_room,
        handlers::chat::send_message,
        handlers::chat::get_messages,
        handlers::chat::leave_room,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::JoinRequest,
        dto::SendMessageRequest,
        dto::LeaveRequest,
        dto::GetMessagesResponse,
        dto::MessageResponse,
        handlers::system::HealthResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Chat", description = "Room membership, messages and history"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

/// Builds the served application: routes, request tracing and permissive
/// CORS, bound to `state`.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
