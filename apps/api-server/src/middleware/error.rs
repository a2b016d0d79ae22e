//! Error handling - RFC 7807 compliant responses.
//!
//! Status contract: ownership rejections are 401, missing resources 404,
//! credential failures 400 (identical for unknown user and wrong
//! password), and every persistence fault - duplicates included - an
//! opaque 500 whose detail goes to the server log only.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    InvalidCredentials,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized => {
                ErrorResponse::unauthorized("You can only modify your own resources")
            }
            AppError::InvalidCredentials => {
                ErrorResponse::bad_request("Please login with correct credentials")
            }
            AppError::Internal(detail) => {
                // Log internal errors, keep the body opaque
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<quill_core::DomainError> for AppError {
    fn from(err: quill_core::DomainError) -> Self {
        use quill_core::DomainError;

        match err {
            DomainError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity, id))
            }
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            // duplicates and partial cascades stay opaque on the wire
            DomainError::DuplicateCredential => AppError::Internal(err.to_string()),
            DomainError::Partial(msg) | DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::DomainError;

    #[test]
    fn duplicate_credential_is_an_opaque_500() {
        let app_err = AppError::from(DomainError::DuplicateCredential);
        assert_eq!(app_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_credentials_is_a_400() {
        let app_err = AppError::from(DomainError::InvalidCredentials);
        assert_eq!(app_err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_is_a_401() {
        let app_err = AppError::from(DomainError::Unauthorized);
        assert_eq!(app_err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
