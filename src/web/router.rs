//! Web application router and middleware setup.

use crate::web::config::WebConfig;
use crate::web::handlers;
use crate::web::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main axum application with all routes and middleware.
pub fn create_app(config: &WebConfig, state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health_check))
        .route("/api/facilities", get(handlers::list_facilities))
        .route("/api/facility/:id", get(handlers::get_facility))
        .route("/api/feedback", post(handlers::submit_feedback))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/analyze-image", post(handlers::analyze_image))
        .with_state(state);

    // Add CORS if enabled
    if config.enable_cors {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
