use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    tracing::info!(
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "Request: {} {}",
        method,
        uri
    );
    response
}
