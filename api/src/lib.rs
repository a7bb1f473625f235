//! HTTP-side authentication layer for the Storefront backend.
//!
//! Provides the JWT authentication middleware, request extractors for the
//! authenticated principal, and the mapping from domain errors to HTTP
//! responses.

pub mod handlers;
pub mod middleware;
