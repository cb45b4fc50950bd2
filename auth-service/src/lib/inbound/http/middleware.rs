use std::time::Instant;

use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Middleware that records the request counter and latency histogram for
/// every handled request, including rejected ones.
pub async fn track_metrics<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let endpoint = req.uri().path().to_string();

    let response = next.run(req).await;

    state.metrics.observe(
        &method,
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
