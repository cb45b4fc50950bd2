use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Map;
use serde_json::Value;

use super::ApiError;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn verify<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let authorization = match headers.get(AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?,
        ),
        None => None,
    };

    let claims = state.auth_service.verify(authorization)?;

    // The decoded claims object is the response body, verbatim
    Ok(Json(claims))
}
