//! Mock implementation of UserDirectory for testing

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::trait_::UserDirectory;

/// Mock user directory for testing
#[derive(Clone)]
pub struct MockUserDirectory {
    subjects: Arc<RwLock<HashMap<String, HashSet<String>>>>,
}

impl MockUserDirectory {
    /// Create a new empty mock directory
    pub fn new() -> Self {
        Self {
            subjects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a subject with the given authority set
    pub async fn insert(&self, subject: impl Into<String>, authorities: HashSet<String>) {
        let mut subjects = self.subjects.write().await;
        subjects.insert(subject.into(), authorities);
    }

    /// Remove a subject, simulating account deletion
    pub async fn remove(&self, subject: &str) -> bool {
        let mut subjects = self.subjects.write().await;
        subjects.remove(subject).is_some()
    }
}

impl Default for MockUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn load_authorities_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<HashSet<String>>, DomainError> {
        let subjects = self.subjects.read().await;
        Ok(subjects.get(subject).cloned())
    }
}
