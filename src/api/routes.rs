//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{health, root};
use crate::metrics::track_requests;

/// Create the API router.
///
/// Unknown paths fall through to axum's default 404 and wrong methods on
/// known paths get its default 405.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(track_requests)),
        )
}
