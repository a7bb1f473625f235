//! Error type definitions for token issuance and authentication.

use thiserror::Error;

/// Startup-time configuration errors
///
/// These are fatal: the service refuses to construct rather than run with
/// unusable key material.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JWT signing secret is missing or empty")]
    MissingJwtSecret,
}

/// Token-related errors
///
/// Every per-request validation failure collapses into a single variant so
/// callers cannot distinguish a bad signature from a malformed token or an
/// expired one.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token invalid or expired")]
    InvalidOrExpired,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Authentication errors past token validation
#[derive(Error, Debug)]
pub enum AuthError {
    /// Token verified but the subject is no longer in the directory
    /// (deleted or disabled since issuance).
    #[error("Subject not found")]
    SubjectNotFound,
}
