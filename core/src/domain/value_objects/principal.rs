//! Authenticated identity produced by token validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The resolved identity of an authenticated request
///
/// Carries the subject and its current authority set as reported by the
/// user directory at authentication time. Immutable; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Subject (account username), never empty
    pub subject: String,

    /// Live authority set granted to the subject
    pub authorities: HashSet<String>,
}

impl Principal {
    /// Creates a new principal
    pub fn new(subject: impl Into<String>, authorities: HashSet<String>) -> Self {
        Self {
            subject: subject.into(),
            authorities,
        }
    }

    /// Checks whether the principal holds the given authority
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }
}
