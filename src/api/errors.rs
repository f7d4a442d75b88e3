use crate::security::errors::AuthError;
use crate::services::errors::ServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Request-terminal error taxonomy. Every variant maps to exactly one
/// status code; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Admin access required")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Duplicate registration email. Answers 400 to match the original
    /// public contract, not 409.
    #[error("Email already registered")]
    Conflict,
    #[error("Identity provider unavailable")]
    Upstream,
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) | ApiError::Conflict => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream => StatusCode::BAD_GATEWAY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(resource) => ApiError::NotFound(resource),
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::DuplicateEmail => ApiError::Conflict,
            ServiceError::Store(e) => {
                tracing::error!("Store failure: {e}");
                ApiError::Internal
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired | AuthError::InvalidToken => {
                tracing::warn!("Authentication rejected: {err}");
                ApiError::Unauthenticated
            }
            AuthError::ProviderUnavailable(detail) => {
                tracing::error!("Identity provider call failed: {detail}");
                ApiError::Upstream
            }
            AuthError::HashingError
            | AuthError::VerificationError
            | AuthError::TokenCreationError => {
                tracing::error!("Credential processing failed: {err}");
                ApiError::Internal
            }
        }
    }
}
