//! User directory trait defining the interface to the account store.
//!
//! The directory is an external collaborator: the token service only reads
//! the current authority set of a subject through this trait and implements
//! no storage of its own.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::errors::DomainError;

/// Read-side interface to the user directory
///
/// Implementations are expected to reflect the *current* state of an
/// account; the authority set returned here overrides whatever was embedded
/// in a token at issuance.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Load the authority set currently granted to a subject
    ///
    /// # Returns
    /// * `Ok(Some(authorities))` - Subject exists; may be an empty set
    /// * `Ok(None)` - No such subject (deleted or disabled)
    /// * `Err(DomainError)` - The directory itself failed
    async fn load_authorities_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<HashSet<String>>, DomainError>;
}
