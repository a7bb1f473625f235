//! Authentication and token signing configuration

use serde::{Deserialize, Serialize};

/// Default token validity window in milliseconds (one hour)
pub const DEFAULT_VALIDITY_MS: i64 = 3_600_000;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token validity window in milliseconds
    #[serde(default = "default_validity_ms")]
    pub validity_ms: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            validity_ms: default_validity_ms(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the validity window in minutes
    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.validity_ms = minutes * 60_000;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

fn default_validity_ms() -> i64 {
    DEFAULT_VALIDITY_MS
}
