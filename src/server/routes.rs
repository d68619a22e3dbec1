/// Dashboard routes definition

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

pub fn create_router(state: Arc<AppState>, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/admin", get(handlers::dashboard_page))
        .route("/api/health", get(handlers::health_check))
        .route("/api/snapshot/summary", get(handlers::get_summary))
        .with_state(state)
        // Add tracing middleware
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}
