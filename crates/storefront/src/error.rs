//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures internal errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>` and every response body is JSON.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::store::{RegisterError, StoreError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persisted-state operation failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Checkout attempt failed (see [`CheckoutError`] for the taxonomy).
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Bad request from client (validation failure).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Wrong or missing admin passphrase.
    #[error("Unauthorized")]
    Unauthorized,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RegisterError> for AppError {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::MissingName | RegisterError::MissingPhone => {
                Self::BadRequest(err.to_string())
            }
            RegisterError::Store(e) => Self::Store(e),
        }
    }
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Store(_) | Self::Internal(_) | Self::Checkout(CheckoutError::Ledger(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Checkout(CheckoutError::Intake(_)) => StatusCode::BAD_GATEWAY,
            Self::Checkout(
                CheckoutError::RegistrationRequired | CheckoutError::AlreadySubmitting,
            ) => StatusCode::CONFLICT,
            Self::Checkout(CheckoutError::CartEmpty) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Client-safe message; internal details stay in the logs.
    fn message(&self) -> String {
        match self {
            Self::Store(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Checkout(CheckoutError::Ledger(_)) => {
                "Something went wrong placing your order. Please try again.".to_string()
            }
            Self::Checkout(CheckoutError::Intake(_)) => {
                "We couldn't send your order notification. Please try again.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Store(_) | Self::Internal(_) | Self::Checkout(CheckoutError::Ledger(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();
        let mut body = serde_json::json!({ "error": self.message() });
        if matches!(self, Self::Checkout(CheckoutError::RegistrationRequired)) {
            body["registration_required"] = serde_json::Value::Bool(true);
        }

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product n1".to_string());
        assert_eq!(err.to_string(), "Not found: product n1");

        let err = AppError::BadRequest("name is required".to_string());
        assert_eq!(err.to_string(), "Bad request: name is required");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(AppError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_checkout_error_status_codes() {
        assert_eq!(
            get_status(AppError::Checkout(CheckoutError::CartEmpty)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Checkout(CheckoutError::RegistrationRequired)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Checkout(CheckoutError::AlreadySubmitting)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_register_error_maps_to_bad_request() {
        let err: AppError = RegisterError::MissingName.into();
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }
}
