//! Main token service implementation

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::principal::Principal;
use crate::errors::{AuthError, ConfigError, DomainError, TokenError};
use crate::repositories::UserDirectory;

use super::config::TokenServiceConfig;

/// Carrier prefix for tokens in the Authorization header
const BEARER_PREFIX: &str = "Bearer ";

/// Service for issuing and verifying signed session tokens
///
/// Key material is derived from the configured secret exactly once, at
/// construction, and never changes afterwards; the service holds no other
/// mutable state and can be shared freely across request handlers.
/// Issuance and verification are synchronous in-memory computations; the
/// directory lookup in [`TokenService::authenticate`] is the only async
/// edge.
pub struct TokenService<D: UserDirectory> {
    directory: D,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<D: UserDirectory> TokenService<D> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `directory` - User directory used for live authority lookups
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `ConfigError::MissingJwtSecret` if the
    /// configured secret is empty.
    pub fn new(directory: D, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(ConfigError::MissingJwtSecret.into());
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        // No grace window: expiry is checked against the exact timestamp.
        validation.leeway = 0;

        Ok(Self {
            directory,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed token for a subject and its granted authorities
    ///
    /// The authority set may be empty. The signature covers the subject,
    /// the authority list, and both timestamps; altering any of them
    /// invalidates the token.
    pub fn issue_token(
        &self,
        subject: &str,
        authorities: &HashSet<String>,
    ) -> Result<String, DomainError> {
        self.issue_token_at(subject, authorities, Utc::now())
    }

    /// Issues a signed token with an explicit issuance instant
    ///
    /// Expiry is `issued_at` plus the configured validity window, so two
    /// issuances at different instants always produce distinct artifacts.
    pub fn issue_token_at(
        &self,
        subject: &str,
        authorities: &HashSet<String>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        if subject.is_empty() {
            return Err(DomainError::Validation {
                message: "token subject must not be empty".to_string(),
            });
        }

        let claims = Claims::issued_at(subject, authorities, issued_at, self.config.validity_ms);
        self.encode_jwt(&claims)
    }

    /// Verifies a token's signature and expiry and returns its claims
    ///
    /// Pure check with no side effects. Every failure — malformed token,
    /// signature mismatch, structurally invalid claims, expiry — collapses
    /// into `TokenError::InvalidOrExpired`.
    pub fn verify_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| {
                debug!("token rejected during verification");
                TokenError::InvalidOrExpired
            })?;

        // The underlying library keeps a token alive at exp == now; the
        // validity window is exclusive at its upper bound.
        if !token_data.claims.is_valid() {
            return Err(TokenError::InvalidOrExpired.into());
        }

        Ok(token_data.claims)
    }

    /// Authenticates a token and resolves the subject's live identity
    ///
    /// Verifies the token, then asks the user directory for the subject's
    /// *current* authority set; the authorities embedded in the token are
    /// bookkeeping only and never reach the returned principal.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, DomainError> {
        let claims = self.verify_token(token)?;

        let authorities = self
            .directory
            .load_authorities_by_subject(&claims.sub)
            .await?
            .ok_or_else(|| {
                debug!("authenticated subject no longer present in directory");
                AuthError::SubjectNotFound
            })?;

        Ok(Principal::new(claims.sub, authorities))
    }

    /// Encodes claims into a JWT token
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed.into())
    }
}

/// Resolves the token value out of an Authorization header value
///
/// Returns the token following the `"Bearer "` prefix. A missing header or
/// a different scheme yields `None`; an anonymous request is a normal
/// outcome, not an error.
pub fn resolve_bearer(header: Option<&str>) -> Option<&str> {
    header.and_then(|value| value.strip_prefix(BEARER_PREFIX))
}
