use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    categories: usize,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state.resolver.categories().len();

    let (status, code) = if categories == 0 {
        tracing::error!("Health check failed: no metric tables configured");
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    } else {
        ("healthy", StatusCode::OK)
    };

    let response = HealthResponse {
        status,
        categories,
        version: env!("CARGO_PKG_VERSION"),
    };

    (code, Json(response))
}
