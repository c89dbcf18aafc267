use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::routes::{analyses, favorites, health_check, recommendations, signatures, videos};

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Pure functions
        .route("/signatures", post(signatures::create))
        .route("/recommendations/score", post(recommendations::score))
        // Feed
        .route("/videos", get(videos::list).post(videos::create))
        .route("/videos/:id", get(videos::get_one))
        .route("/analyses", post(analyses::create))
        // Favorites & recommendations
        .route("/favorites", get(favorites::list))
        .route("/favorites/:id/toggle", post(favorites::toggle))
        .route("/recommendations", get(recommendations::for_session))
}
