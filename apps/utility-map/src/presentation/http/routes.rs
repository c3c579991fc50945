use super::{
    handlers::{health, map},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, middleware, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Map styling
        .route("/api/v1/map/categories", get(map::list_categories))
        .route("/api/v1/map/legend", get(map::get_legend))
        .route(
            "/api/v1/map/styles",
            get(map::get_recorded_styles).post(map::style_features),
        )
        .route("/api/v1/map/styles/{region}", get(map::get_region_style))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
