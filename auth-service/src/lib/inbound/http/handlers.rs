use auth::CredentialError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::AuthError;

pub mod health;
pub mod login;
pub mod metrics;
pub mod register;
pub mod verify;

/// Transport-level rejection: a status code plus a short human-readable
/// reason, serialized as `{"detail": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::Unauthorized(detail) => (StatusCode::UNAUTHORIZED, detail),
            ApiError::UnprocessableEntity(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            ApiError::InternalServerError(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Error response body shape shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUsername => {
                ApiError::BadRequest("Username already registered".to_string())
            }
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::Credential(CredentialError::MissingCredential) => {
                ApiError::Unauthorized("Missing Authorization Header".to_string())
            }
            AuthError::Credential(CredentialError::UnsupportedScheme) => {
                ApiError::Unauthorized("Invalid authentication scheme".to_string())
            }
            // Malformed header and bad signature are indistinguishable on
            // the wire
            AuthError::Credential(
                CredentialError::MalformedCredential | CredentialError::InvalidSignatureOrFormat,
            ) => ApiError::Unauthorized("Invalid token".to_string()),
            AuthError::InvalidUsername(e) => ApiError::UnprocessableEntity(e.to_string()),
            AuthError::Hashing(_) | AuthError::TokenIssue(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
            AuthError::StorageUnavailable(_) => {
                ApiError::InternalServerError("Storage unavailable".to_string())
            }
        }
    }
}
