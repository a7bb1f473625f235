//! Configuration for the token service

use jsonwebtoken::Algorithm;
use sf_shared::config::auth::DEFAULT_VALIDITY_MS;
use sf_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token validity window in milliseconds
    pub validity_ms: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            validity_ms: DEFAULT_VALIDITY_MS,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            algorithm: Algorithm::HS256,
            validity_ms: config.validity_ms,
        }
    }
}
