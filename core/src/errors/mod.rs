//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, ConfigError, TokenError};

use sf_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            // A vanished subject renders the same as a bad token; the wire
            // surface never says which.
            DomainError::Token(TokenError::InvalidOrExpired) | DomainError::Auth(_) => {
                ErrorResponse::new(error_codes::TOKEN_INVALID, "Token invalid or expired")
            }
            DomainError::Token(TokenError::GenerationFailed) => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "Internal server error")
            }
            DomainError::Config(err) => {
                ErrorResponse::new(error_codes::CONFIGURATION_ERROR, err.to_string())
            }
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            DomainError::NotFound { resource } => {
                ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource))
            }
            DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "Internal server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_and_auth_failures_share_one_surface() {
        let invalid: DomainError = TokenError::InvalidOrExpired.into();
        let missing: DomainError = AuthError::SubjectNotFound.into();

        let invalid_response = invalid.to_error_response();
        let missing_response = missing.to_error_response();

        assert_eq!(invalid_response.error, error_codes::TOKEN_INVALID);
        assert_eq!(invalid_response.error, missing_response.error);
        assert_eq!(invalid_response.message, missing_response.message);
    }

    #[test]
    fn test_generation_failure_is_a_server_fault() {
        let error: DomainError = TokenError::GenerationFailed.into();
        assert_eq!(
            error.to_error_response().error,
            error_codes::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_config_error_response() {
        let error: DomainError = ConfigError::MissingJwtSecret.into();
        let response = error.to_error_response();
        assert_eq!(response.error, error_codes::CONFIGURATION_ERROR);
    }
}
