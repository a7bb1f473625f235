//! Token entities for JWT-based authentication.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the JWT payload
///
/// `auth` is a custom claim carrying the authority identifiers granted at
/// issuance. It is for bookkeeping and audit; the enforced authority set of
/// an authenticated request comes from a live directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account username)
    pub sub: String,

    /// Granted authorities at issuance
    pub auth: Vec<String>,

    /// Issued at timestamp (epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (epoch seconds, exclusive)
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims issued now for the given subject and authorities
    pub fn new(
        subject: impl Into<String>,
        authorities: &HashSet<String>,
        validity_ms: i64,
    ) -> Self {
        Self::issued_at(subject, authorities, Utc::now(), validity_ms)
    }

    /// Creates claims issued at an explicit instant
    ///
    /// The authority list is sorted so that equal authority sets always
    /// serialize identically.
    pub fn issued_at(
        subject: impl Into<String>,
        authorities: &HashSet<String>,
        issued_at: DateTime<Utc>,
        validity_ms: i64,
    ) -> Self {
        let mut auth: Vec<String> = authorities.iter().cloned().collect();
        auth.sort();

        let expires_at = issued_at + Duration::milliseconds(validity_ms);
        // Whole-second claim resolution: round up so a positive window
        // never collapses to exp == iat.
        let mut exp = expires_at.timestamp();
        if expires_at.timestamp_subsec_millis() > 0 {
            exp += 1;
        }

        Self {
            sub: subject.into(),
            auth,
            iat: issued_at.timestamp(),
            exp,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    ///
    /// The expiry bound is exclusive: a token checked exactly at its
    /// expiration timestamp is already expired.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are currently valid
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now < self.exp
    }

    /// The authority identifiers embedded at issuance, as a set
    pub fn authorities(&self) -> HashSet<String> {
        self.auth.iter().cloned().collect()
    }
}
