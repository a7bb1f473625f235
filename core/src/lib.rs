//! # Storefront Core
//!
//! Core business logic and domain layer for the Storefront backend.
//! This crate contains domain entities, the token service, the user
//! directory interface, and error types that form the foundation of the
//! authentication stack.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
