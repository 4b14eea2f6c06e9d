use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::handle_panic;
use crate::handlers;
use crate::state::AppState;

/// Routes without middleware.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route(
            "/bfhl",
            get(handlers::operation_code).post(handlers::classify),
        )
        .with_state(state)
}

/// Wrap `router` with panic recovery, request tracing and permissive CORS.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Full application router.
pub fn create_router(state: AppState) -> Router {
    with_layers(routes(state))
}
