/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check (`GET /`)
 * 2. API routes (auth, users, blogs, comments)
 * 3. Swagger UI and the OpenAPI document under `/api-docs`
 * 4. Uploaded images under `/images`
 * 5. Fallback handler (404)
 *
 * # Layers
 *
 * Every request runs through `TraceLayer` for request/response spans, and
 * bodies are capped at the configured upload limit.
 */

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::docs::swagger_ui;
use crate::backend::server::state::AppState;
use crate::backend::upload::PUBLIC_PREFIX;

/// Body of the health check
pub const HEALTH_MESSAGE: &str = "API is running...";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database, token keys, image store)
/// * `max_body_bytes` - Request body cap, uploads included
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, max_body_bytes: usize) -> Router<()> {
    let router = Router::new().route("/", get(|| async { HEALTH_MESSAGE }));

    // Add API routes
    let router = configure_api_routes(router);

    let router = router.merge(swagger_ui());

    // Serve uploaded images from the upload directory
    let router = router.nest_service(PUBLIC_PREFIX, ServeDir::new(app_state.images.root()));

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("Not found") });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(app_state)
}
