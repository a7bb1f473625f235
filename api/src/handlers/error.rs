//! Mapping from domain errors to HTTP responses.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use sf_core::errors::{DomainError, TokenError};
use sf_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};

/// Error type returned by the authentication layer
///
/// Token and authentication failures are client errors and answer 401;
/// they never surface as internal server errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// The response for requests that carry no usable credentials
    pub fn unauthorized() -> Self {
        Self::AuthenticationRequired
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ApiError::Domain(error) => match error {
                DomainError::Token(TokenError::InvalidOrExpired) | DomainError::Auth(_) => {
                    StatusCode::UNAUTHORIZED
                }
                DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::AuthenticationRequired => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication required")
            }
            ApiError::Domain(error) => error.to_error_response(),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
