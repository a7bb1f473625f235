//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Authentication and token signing configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use environment::Environment;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Authentication configuration
    pub auth: JwtConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            auth: JwtConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            auth: JwtConfig::default(),
        }
    }

    /// Create configuration for production environment
    ///
    /// The signing secret is expected to arrive from the deployment
    /// environment; the placeholder here fails the token service's
    /// startup check unless it is replaced.
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            auth: JwtConfig::new(
                std::env::var("JWT_SECRET").unwrap_or_default(),
            ),
        }
    }

    /// Load configuration from environment
    pub fn from_env() -> Self {
        match Environment::from_env() {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config
            }
        }
    }
}
