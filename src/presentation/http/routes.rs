//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{auth_middleware, logging};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(logging::track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Routes that need no access token
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::users::post_user))
        .route("/authentications", post(handlers::authentications::post_authentication))
        .route("/threads/{thread_id}", get(handlers::threads::get_thread))
}

/// Routes that require a bearer access token
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/threads", post(handlers::threads::post_thread))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::comments::post_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::comments::delete_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(handlers::replies::post_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::replies::delete_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(handlers::likes::put_like),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
