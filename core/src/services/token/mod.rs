//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Signed token issuance for a subject and its granted authorities
//! - Token verification (signature and expiry, collapsed failure reporting)
//! - Authentication against the live user directory
//! - Bearer token resolution from the Authorization header value

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{resolve_bearer, TokenService};
