//! API router.
//!
//! Middleware stack (outermost → innermost):
//! 1. CORS → 2. Audit logger

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the API router around a prepared context.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/chat", post(endpoints::chat::send))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        // ServiceBuilder applies layers top to bottom, outermost first.
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(middleware::audit::log_access)),
        )
}
