//! # Centralized Error Handling
//!
//! Application-wide error type used across the backend, following the
//! `thiserror` pattern.
//!
//! ## Taxonomy
//!
//! 1. **Caller errors** - [`Unauthorized`](AppError::Unauthorized) → 401;
//!    the message is returned to the caller unchanged.
//! 2. **External-dependency errors** - [`Upstream`](AppError::Upstream) → 500;
//!    the real failure is logged server-side, the response body carries only
//!    a generic message so internals never leak.
//! 3. **Internal errors** - [`Config`](AppError::Config) and
//!    [`Internal`](AppError::Internal) → 500, same opaque body.
//!
//! No error is retried automatically; callers re-authenticate or retry.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
///
/// Each variant carries a context string. For 5xx variants the context is for
/// server logs only and is never sent to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or invalid credential. The message is safe for callers.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Failure of an external collaborator (identity or wallet service).
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Config(_) | AppError::Upstream(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message returned to the caller.
    ///
    /// Only the unauthorized message passes through; server-side failures are
    /// collapsed to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::Config(_) | AppError::Upstream(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Full detail goes to the server logs; the body stays opaque on 5xx.
        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::warn!("Client error: {}", self);
        }

        let body = Json(json!({ "error": self.user_message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_401_with_message() {
        let err = AppError::Unauthorized("Missing authorization token".to_string());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.user_message(), "Missing authorization token");
    }

    #[test]
    fn test_upstream_detail_is_not_exposed() {
        let err = AppError::Upstream("identity service timed out at 10.0.0.3".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let err = AppError::Internal("cookie header construction failed".to_string());
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
