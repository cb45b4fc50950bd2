use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use super::ApiError;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Content type of the Prometheus text exposition format.
const TEXT_EXPOSITION: &str = "text/plain; version=0.0.4";

pub async fn export_metrics<S: AuthServicePort>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = state
        .metrics
        .render()
        .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    Ok(([(CONTENT_TYPE, TEXT_EXPOSITION)], body))
}
